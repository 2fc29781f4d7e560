use std::env;
use std::str::FromStr;
use tracing::warn;

const DEFAULT_CONFETTI_PARTICLES: usize = 150;
const DEFAULT_WINDOW_WIDTH: f32 = 460.0;
const DEFAULT_WINDOW_HEIGHT: f32 = 640.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Prefilled into the name inputs; blank still means "use the default".
    pub player_x: String,
    pub player_o: String,
    pub confetti_particles: usize,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            player_x: String::new(),
            player_o: String::new(),
            confetti_particles: DEFAULT_CONFETTI_PARTICLES,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = ClientConfig::default();

        ClientConfig {
            player_x: lookup("TTT_PLAYER_X").unwrap_or(defaults.player_x),
            player_o: lookup("TTT_PLAYER_O").unwrap_or(defaults.player_o),
            confetti_particles: parse_or(
                &lookup,
                "TTT_CONFETTI_PARTICLES",
                defaults.confetti_particles,
            ),
            window_width: parse_or(&lookup, "TTT_WINDOW_WIDTH", defaults.window_width),
            window_height: parse_or(&lookup, "TTT_WINDOW_HEIGHT", defaults.window_height),
        }
    }
}

fn parse_or<T: FromStr + Copy>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> T {
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Ignoring invalid {}={:?}, using default.", key, raw);
            default
        }),
        None => default,
    }
}
