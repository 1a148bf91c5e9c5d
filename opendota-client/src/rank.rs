//! Seasonal rank decoded from OpenDota `rank_tier`.
//!
//! `rank_tier` is a two-digit number: tens digit is the medal (1 Herald .. 8 Immortal),
//! ones digit is the star count (1..5). Immortal has no stars.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Medal {
    Herald,
    Guardian,
    Crusader,
    Archon,
    Legend,
    Ancient,
    Divine,
    Immortal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rank {
    pub medal: Medal,
    pub stars: u8,
}

impl Rank {
    /// Returns `None` for unranked (`null`, 0) or malformed tiers.
    pub fn from_tier(tier: i64) -> Option<Rank> {
        let medal = match tier / 10 {
            1 => Medal::Herald,
            2 => Medal::Guardian,
            3 => Medal::Crusader,
            4 => Medal::Archon,
            5 => Medal::Legend,
            6 => Medal::Ancient,
            7 => Medal::Divine,
            8 => Medal::Immortal,
            _ => return None,
        };
        let stars = match medal {
            Medal::Immortal => 0,
            _ => (tier % 10).clamp(0, 5) as u8,
        };
        Some(Rank { medal, stars })
    }
}
