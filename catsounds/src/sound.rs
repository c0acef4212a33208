use std::fmt;

use rand::distributions::{Distribution, Standard};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// The fixed vocabulary a [Record](crate::record::Record) draws its `sound` from.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Sound {
    Meow,
    Mrrp,
    Purr,
    Hiss,
    Nya,
    Mrow,
    Mew,
    Miau,
    Rrrow,
}

impl Sound {
    pub const ALL: [Sound; 9] = [
        Sound::Meow,
        Sound::Mrrp,
        Sound::Purr,
        Sound::Hiss,
        Sound::Nya,
        Sound::Mrow,
        Sound::Mew,
        Sound::Miau,
        Sound::Rrrow,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Sound::Meow => "meow",
            Sound::Mrrp => "mrrp",
            Sound::Purr => "purr",
            Sound::Hiss => "hiss",
            Sound::Nya => "nya",
            Sound::Mrow => "mrow",
            Sound::Mew => "mew",
            Sound::Miau => "miau",
            Sound::Rrrow => "rrrow",
        }
    }
}

impl fmt::Display for Sound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Uniform over [`Sound::ALL`].
impl Distribution<Sound> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Sound {
        Sound::ALL[rng.gen_range(0..Sound::ALL.len())]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_tokens_serialize_lowercase() {
        for sound in Sound::ALL {
            let json = serde_json::to_string(&sound).unwrap();
            assert_eq!(json, format!("\"{}\"", sound.as_str()));
            let back: Sound = serde_json::from_str(&json).unwrap();
            assert_eq!(back, sound);
        }
        assert!(serde_json::from_str::<Sound>("\"woof\"").is_err());
    }

    #[test]
    fn test_vocabulary_is_distinct() {
        let tokens: HashSet<&str> = Sound::ALL.into_iter().map(Sound::as_str).collect();
        assert_eq!(tokens.len(), 9);
    }

    #[test]
    fn test_zero_source_picks_meow() {
        let mut rng = StepRng::new(0, 0);
        for _ in 0..10 {
            assert_eq!(rng.gen::<Sound>(), Sound::Meow);
        }
    }

    #[test]
    fn test_sampling_reaches_every_sound() {
        let mut rng = StdRng::seed_from_u64(7);
        let seen: HashSet<Sound> = (0..1_000).map(|_| rng.gen::<Sound>()).collect();
        assert_eq!(seen.len(), Sound::ALL.len());
    }
}
