use std::fmt::Display;
use std::fmt::Formatter;

use enumset::EnumSet;
use enumset::EnumSetType;

/// The lemma schemas the saturation engine can apply.
#[derive(Debug, EnumSetType)]
pub enum SaturationRule {
    /// `[x] y*x <= z*x  ==>  Ω*(x, y) \/ y <= z \/ x = 0`
    UgtX,
    /// `[y] z' <= y /\ y*x <= z*x  ==>  Ω*(x, y) \/ z'*x <= z*x`
    UgtY,
    /// `[z] z <= y' /\ y*x <= z*x  ==>  Ω*(x, y') \/ y*x <= y'*x`
    UgtZ,
    /// `[x] y <= a*x /\ x <= z  ==>  Ω*(a, z) \/ y <= a*z`
    YLeAxAndXLeZ,
}

impl SaturationRule {
    /// The order in which the rules are tried on every literal of the core.
    pub const ORDER: [SaturationRule; 4] = [
        SaturationRule::UgtX,
        SaturationRule::UgtY,
        SaturationRule::UgtZ,
        SaturationRule::YLeAxAndXLeZ,
    ];
}

impl Display for SaturationRule {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SaturationRule::UgtX => "ugt_x",
            SaturationRule::UgtY => "ugt_y",
            SaturationRule::UgtZ => "ugt_z",
            SaturationRule::YLeAxAndXLeZ => "y_l_ax_and_x_l_z",
        };
        write!(f, "{name}")
    }
}

/// Options which determine how the saturation engine behaves.
#[derive(Debug, Clone, Copy)]
pub struct SaturationOptions {
    /// The rules which may be applied. Disabled rules are skipped, the relative order of the
    /// remaining rules is given by [`SaturationRule::ORDER`].
    pub rules: EnumSet<SaturationRule>,
}

impl Default for SaturationOptions {
    fn default() -> Self {
        SaturationOptions {
            rules: EnumSet::all(),
        }
    }
}

impl SaturationOptions {
    pub fn with_rules(rules: impl Into<EnumSet<SaturationRule>>) -> SaturationOptions {
        SaturationOptions {
            rules: rules.into(),
        }
    }

    pub fn without(mut self, rule: SaturationRule) -> SaturationOptions {
        let _ = self.rules.remove(rule);
        self
    }

    pub fn is_enabled(&self, rule: SaturationRule) -> bool {
        self.rules.contains(rule)
    }
}
