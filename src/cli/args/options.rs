use clap::ValueEnum;

/// Sort directions accepted via the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum DirectionArg {
    Asc,
    Desc,
}

impl DirectionArg {
    /// Return the string representation consumed by configuration loading.
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            DirectionArg::Asc => "asc",
            DirectionArg::Desc => "desc",
        }
    }
}

/// Predefined column presets selectable from the CLI.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum UiPresetArg {
    Default,
    Korean,
}

impl UiPresetArg {
    /// Return the preset identifier consumed by configuration loading.
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            UiPresetArg::Default => "default",
            UiPresetArg::Korean => "korean",
        }
    }
}

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Plain,
    Json,
    Csv,
}
