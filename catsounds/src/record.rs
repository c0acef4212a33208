use serde::{Deserialize, Serialize};

use crate::sound::Sound;

/// One generated fixture entry. Field order is part of the output format.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record {
    pub id: u64,
    pub sound: Sound,
}

impl Record {
    #[must_use]
    pub fn new(id: u64, sound: Sound) -> Self {
        Record { id, sound }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_field_order() {
        let record = Record::new(12, Sound::Purr);
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"id":12,"sound":"purr"}"#
        );
    }

    #[test]
    fn test_rejects_unknown_sound() {
        let res = serde_json::from_str::<Record>(r#"{"id": 1, "sound": "bark"}"#);
        assert!(res.is_err());
        let res = serde_json::from_str::<Record>(r#"{"id": -1, "sound": "mew"}"#);
        assert!(res.is_err());
    }
}
