use crate::bitstring::Bitstring;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// One synthesis transformation. `Display` yields the exact command text
/// handed to the tool.
#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
pub enum Action {
    // --- Technology-independent AIG passes ---
    #[strum(to_string = "rewrite")]
    Rewrite,
    #[strum(to_string = "rewrite -z")]
    RewriteZero,
    #[strum(to_string = "refactor")]
    Refactor,
    #[strum(to_string = "refactor -z")]
    RefactorZero,
    #[strum(to_string = "resub")]
    Resub,
    #[strum(to_string = "resub -z")]
    ResubZero,
    #[strum(to_string = "balance")]
    Balance,
    #[strum(to_string = "ifraig")]
    Ifraig,
    #[strum(to_string = "dfraig")]
    Dfraig,
    #[strum(to_string = "&get -n; &sopb; &put")]
    SopBalanceRoundTrip,
    #[strum(to_string = "&get -n; &blut; &put")]
    LutBalanceRoundTrip,
    #[strum(to_string = "&get -n; &dsdb; &put")]
    DsdBalanceRoundTrip,

    // --- Mapped / structural GIA passes ---
    #[strum(to_string = "&st")]
    GiaStrash,
    #[strum(to_string = "&blut")]
    GiaLutBalance,
    #[strum(to_string = "&b")]
    GiaBalance,
    #[strum(to_string = "&dsdb")]
    GiaDsdBalance,
    #[strum(to_string = "&sopb")]
    GiaSopBalance,
    #[strum(to_string = "&if -g")]
    GiaIfSop,
    #[strum(to_string = "&if -y")]
    GiaIfDelay,
    #[strum(to_string = "&dc2")]
    GiaDc2,
    #[strum(to_string = "&dch")]
    GiaDch,
    #[strum(to_string = "&kf")]
    GiaKf,
    #[strum(to_string = "&jf")]
    GiaJf,
    #[strum(to_string = "&mf")]
    GiaMf,
    #[strum(to_string = "&lf")]
    GiaLf,
    #[strum(to_string = "&if")]
    GiaIf,
    #[strum(to_string = "&speedup")]
    GiaSpeedup,
    #[strum(to_string = "&mfs")]
    GiaMfs,
}

/// Which 16-entry action table the 4-bit codes are read through, together
/// with the script framing that goes with it.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    ValueEnum,
    Display,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Vocabulary {
    #[default]
    Generic,
    Mapped,
}

impl Vocabulary {
    /// Total mapping from a 4-bit code (MSB first) to an action.
    pub fn action(self, code: [bool; 4]) -> Action {
        use Action::*;
        match self {
            Self::Generic => match code {
                [false, false, false, false] => Rewrite,
                [false, false, false, true] => RewriteZero,
                [false, false, true, false] => Refactor,
                [false, false, true, true] => RefactorZero,
                [false, true, false, false] => Resub,
                [false, true, false, true] => ResubZero,
                [false, true, true, false] => Balance,
                [false, true, true, true] => Ifraig,
                [true, false, false, false] => Rewrite,
                [true, false, false, true] => RefactorZero,
                [true, false, true, false] => RewriteZero,
                [true, false, true, true] => Balance,
                [true, true, false, false] => Dfraig,
                [true, true, false, true] => SopBalanceRoundTrip,
                [true, true, true, false] => LutBalanceRoundTrip,
                [true, true, true, true] => DsdBalanceRoundTrip,
            },
            Self::Mapped => match code {
                [false, false, false, false] => GiaStrash,
                [false, false, false, true] => GiaLutBalance,
                [false, false, true, false] => GiaBalance,
                [false, false, true, true] => GiaDsdBalance,
                [false, true, false, false] => GiaSopBalance,
                [false, true, false, true] => GiaIfSop,
                [false, true, true, false] => GiaIfDelay,
                [false, true, true, true] => GiaDc2,
                [true, false, false, false] => GiaDch,
                [true, false, false, true] => GiaKf,
                [true, false, true, false] => GiaJf,
                [true, false, true, true] => GiaMf,
                [true, true, false, false] => GiaLf,
                [true, true, false, true] => GiaIf,
                [true, true, true, false] => GiaSpeedup,
                [true, true, true, true] => GiaMfs,
            },
        }
    }

    /// Decodes every complete 4-bit chunk of `bits`, in order.
    pub fn decode(self, bits: &Bitstring) -> Vec<Action> {
        bits.nibbles().map(|code| self.action(code)).collect()
    }

    pub fn load_directive(self, design_path: &str) -> String {
        match self {
            Self::Generic => format!("read_blif {}; strash", design_path),
            Self::Mapped => format!("read_blif {}; &get", design_path),
        }
    }

    pub fn measure_directive(self) -> &'static str {
        match self {
            Self::Generic => "if -K 6; print_stats",
            Self::Mapped => "if -v -K 6; print_stats",
        }
    }

    /// High-effort reference flow the QoR is normalized against.
    pub fn baseline_body(self) -> &'static str {
        match self {
            Self::Generic => "alias; resyn2",
            Self::Mapped => "&blut; &sopb; &if -g; &dch; &lf",
        }
    }

    /// `<load>; <action>; ...; <measure>;`
    pub fn script(self, design_path: &str, actions: &[Action]) -> String {
        let mut script = self.load_directive(design_path);
        script.push_str("; ");
        for action in actions {
            script.push_str(&action.to_string());
            script.push_str("; ");
        }
        script.push_str(self.measure_directive());
        script.push(';');
        script
    }

    pub fn baseline_script(self, design_path: &str) -> String {
        format!(
            "{}; {}; {};",
            self.load_directive(design_path),
            self.baseline_body(),
            self.measure_directive()
        )
    }
}
