//! Rotating cookie signing secret.
//!
//! # Key invariants and assumptions
//! - Every rotation replaces the secret with fresh random bytes and bumps the
//!   generation by one.
//! - Readers never observe a partially written secret.
use parking_lot::RwLock;
use rand::RngCore;

const SECRET_LEN: usize = 32;

#[derive(Debug)]
struct SecretState {
    bytes: [u8; SECRET_LEN],
    generation: u64,
}

#[derive(Debug)]
pub struct CookieSecret {
    state: RwLock<SecretState>,
}

impl CookieSecret {
    pub fn generate() -> Self {
        Self {
            state: RwLock::new(SecretState {
                bytes: random_secret(),
                generation: 0,
            }),
        }
    }

    /// Replace the secret and return the new generation.
    pub fn rotate(&self) -> u64 {
        let mut state = self.state.write();
        state.bytes = random_secret();
        state.generation += 1;
        state.generation
    }

    pub fn generation(&self) -> u64 {
        self.state.read().generation
    }

    pub fn current(&self) -> [u8; SECRET_LEN] {
        self.state.read().bytes
    }
}

fn random_secret() -> [u8; SECRET_LEN] {
    let mut bytes = [0u8; SECRET_LEN];
    rand::thread_rng().fill_bytes(&mut bytes);
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotate_replaces_secret_and_bumps_generation() {
        let secret = CookieSecret::generate();
        let before = secret.current();
        assert_eq!(secret.generation(), 0);
        assert_eq!(secret.rotate(), 1);
        assert_eq!(secret.generation(), 1);
        assert_ne!(secret.current(), before);
    }
}
