use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of instructor names for issuers that assign one per certificate.
/// Injectable so tests can pin a seed or stub the output entirely.
pub trait NameSource {
    fn full_name(&mut self) -> String;
}

const FIRST_NAMES: &[&str] = &[
    "Aaron", "Beatriz", "Carlos", "Devika", "Elena", "Farhan", "Grace", "Hiroshi", "Ingrid",
    "Jamal", "Katya", "Liam", "Meera", "Nadia", "Oscar", "Priya", "Quentin", "Rosa", "Stefan",
    "Tara", "Umar", "Valeria", "Wei", "Ximena", "Yusuf", "Zoe",
];

const LAST_NAMES: &[&str] = &[
    "Anderson", "Bhatt", "Chen", "Dubois", "Eriksen", "Fernandez", "Gupta", "Hassan", "Ivanova",
    "Jackson", "Kim", "Lopez", "Mehta", "Nakamura", "Okafor", "Petrov", "Quinn", "Rodriguez",
    "Schmidt", "Tanaka", "Ueda", "Vargas", "Walsh", "Xu", "Yilmaz", "Zhang",
];

pub struct RandomNameSource {
    rng: StdRng,
}

impl RandomNameSource {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomNameSource {
    fn default() -> Self {
        Self::new()
    }
}

impl NameSource for RandomNameSource {
    fn full_name(&mut self) -> String {
        let first = FIRST_NAMES[self.rng.gen_range(0..FIRST_NAMES.len())];
        let last = LAST_NAMES[self.rng.gen_range(0..LAST_NAMES.len())];
        format!("{} {}", first, last)
    }
}
