use std::fmt;
use std::str::FromStr;

use crate::error::LabelError;

/// Inspection-control category printed in large type on the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ControlCategory {
    #[default]
    Xry,
    XryEtd,
    PhsEtd,
    VckEtd,
    VckPhs,
    Kc,
    RaRcvd,
    ExemptedBiom,
    ExemptedNucl,
}

impl ControlCategory {
    /// All categories in the order the operator is offered them.
    pub const ALL: [ControlCategory; 9] = [
        ControlCategory::Xry,
        ControlCategory::XryEtd,
        ControlCategory::PhsEtd,
        ControlCategory::VckEtd,
        ControlCategory::VckPhs,
        ControlCategory::Kc,
        ControlCategory::RaRcvd,
        ControlCategory::ExemptedBiom,
        ControlCategory::ExemptedNucl,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ControlCategory::Xry => "SPX by XRY",
            ControlCategory::XryEtd => "SPX by XRY/ETD",
            ControlCategory::PhsEtd => "SPX by PHS/ETD",
            ControlCategory::VckEtd => "SPX by VCK/ETD",
            ControlCategory::VckPhs => "SPX by VCK/PHS",
            ControlCategory::Kc => "SPX by KC",
            ControlCategory::RaRcvd => "SPX by RA/RCVD",
            ControlCategory::ExemptedBiom => "SPX by EXEMPTED-BIOM",
            ControlCategory::ExemptedNucl => "SPX by EXEMPTED-NUCL",
        }
    }

    fn choices() -> String {
        Self::ALL
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ControlCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ControlCategory {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| LabelError::UnknownControl {
                given: s.to_string(),
                choices: Self::choices(),
            })
    }
}
