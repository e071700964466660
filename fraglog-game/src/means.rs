//! Means-of-death catalogue reported on kill lines.

/// Cause of a kill, numbered the way the server prints it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeansOfDeath {
    Unknown,
    Shotgun,
    Gauntlet,
    Machinegun,
    Grenade,
    GrenadeSplash,
    Rocket,
    RocketSplash,
    Plasma,
    PlasmaSplash,
    Railgun,
    Lightning,
    Bfg,
    BfgSplash,
    Water,
    Slime,
    Lava,
    Crush,
    Telefrag,
    Falling,
    Suicide,
    TargetLaser,
    TriggerHurt,
    Nail,
    Chaingun,
    ProximityMine,
    Kamikaze,
    Juiced,
    Grapple,
}

impl MeansOfDeath {
    /// Every cause, indexed by its numeric id.
    pub const ALL: [Self; 29] = [
        Self::Unknown,
        Self::Shotgun,
        Self::Gauntlet,
        Self::Machinegun,
        Self::Grenade,
        Self::GrenadeSplash,
        Self::Rocket,
        Self::RocketSplash,
        Self::Plasma,
        Self::PlasmaSplash,
        Self::Railgun,
        Self::Lightning,
        Self::Bfg,
        Self::BfgSplash,
        Self::Water,
        Self::Slime,
        Self::Lava,
        Self::Crush,
        Self::Telefrag,
        Self::Falling,
        Self::Suicide,
        Self::TargetLaser,
        Self::TriggerHurt,
        Self::Nail,
        Self::Chaingun,
        Self::ProximityMine,
        Self::Kamikaze,
        Self::Juiced,
        Self::Grapple,
    ];

    #[must_use]
    pub fn from_id(id: u32) -> Option<Self> {
        usize::try_from(id)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
    }

    /// Log spelling, e.g. `MOD_TRIGGER_HURT`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "MOD_UNKNOWN",
            Self::Shotgun => "MOD_SHOTGUN",
            Self::Gauntlet => "MOD_GAUNTLET",
            Self::Machinegun => "MOD_MACHINEGUN",
            Self::Grenade => "MOD_GRENADE",
            Self::GrenadeSplash => "MOD_GRENADE_SPLASH",
            Self::Rocket => "MOD_ROCKET",
            Self::RocketSplash => "MOD_ROCKET_SPLASH",
            Self::Plasma => "MOD_PLASMA",
            Self::PlasmaSplash => "MOD_PLASMA_SPLASH",
            Self::Railgun => "MOD_RAILGUN",
            Self::Lightning => "MOD_LIGHTNING",
            Self::Bfg => "MOD_BFG",
            Self::BfgSplash => "MOD_BFG_SPLASH",
            Self::Water => "MOD_WATER",
            Self::Slime => "MOD_SLIME",
            Self::Lava => "MOD_LAVA",
            Self::Crush => "MOD_CRUSH",
            Self::Telefrag => "MOD_TELEFRAG",
            Self::Falling => "MOD_FALLING",
            Self::Suicide => "MOD_SUICIDE",
            Self::TargetLaser => "MOD_TARGET_LASER",
            Self::TriggerHurt => "MOD_TRIGGER_HURT",
            Self::Nail => "MOD_NAIL",
            Self::Chaingun => "MOD_CHAINGUN",
            Self::ProximityMine => "MOD_PROXIMITY_MINE",
            Self::Kamikaze => "MOD_KAMIKAZE",
            Self::Juiced => "MOD_JUICED",
            Self::Grapple => "MOD_GRAPPLE",
        }
    }
}

/// Pick the cause label for a kill line.
///
/// The trailing `by MOD_*` name wins over the numeric id; names the
/// catalogue does not know are kept verbatim.
#[must_use]
pub fn cause_label(means_id: Option<u32>, cause_name: Option<&str>) -> String {
    if let Some(name) = cause_name.filter(|name| !name.is_empty()) {
        return name.to_string();
    }
    means_id
        .and_then(MeansOfDeath::from_id)
        .unwrap_or(MeansOfDeath::Unknown)
        .as_str()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_line_up_with_catalogue() {
        assert_eq!(MeansOfDeath::from_id(0), Some(MeansOfDeath::Unknown));
        assert_eq!(MeansOfDeath::from_id(7), Some(MeansOfDeath::RocketSplash));
        assert_eq!(MeansOfDeath::from_id(22), Some(MeansOfDeath::TriggerHurt));
        assert_eq!(MeansOfDeath::from_id(28), Some(MeansOfDeath::Grapple));
        assert_eq!(MeansOfDeath::from_id(29), None);
    }

    #[test]
    fn cause_label_prefers_trailing_name() {
        assert_eq!(cause_label(Some(22), Some("MOD_FALLING")), "MOD_FALLING");
        assert_eq!(cause_label(Some(22), None), "MOD_TRIGGER_HURT");
        assert_eq!(cause_label(Some(99), None), "MOD_UNKNOWN");
        assert_eq!(cause_label(None, Some("")), "MOD_UNKNOWN");
        assert_eq!(cause_label(None, Some("MOD_SPOON")), "MOD_SPOON");
    }
}
