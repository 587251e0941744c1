use serde::{Deserialize, Serialize};

/// Independent toggles supplied with a lookup request.
///
/// `trace` and `nssearch` select a mode (trace wins when both are set); the
/// remaining flags shape the resolver and its output on the other paths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct QueryOptions {
    #[serde(default)]
    pub trace: bool,
    #[serde(default)]
    pub short: bool,
    #[serde(default)]
    pub norec: bool,
    #[serde(default)]
    pub dnssec: bool,
    #[serde(default)]
    pub cdflag: bool,
    #[serde(default)]
    pub nssearch: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryMode {
    Trace,
    NsSearch,
    Resolve,
}

impl QueryOptions {
    pub fn mode(&self) -> QueryMode {
        if self.trace {
            QueryMode::Trace
        } else if self.nssearch {
            QueryMode::NsSearch
        } else {
            QueryMode::Resolve
        }
    }
}

/// Header flags a stub resolver puts on outgoing queries.
///
/// `None` means "never configured": the query goes out with the builder's
/// default (recursion desired). Configuring flags replaces the whole set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryFlags {
    explicit: Option<FlagSet>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlagSet {
    pub recursion_desired: bool,
    pub authentic_data: bool,
    pub checking_disabled: bool,
}

impl FlagSet {
    pub const RD: FlagSet = FlagSet {
        recursion_desired: true,
        authentic_data: false,
        checking_disabled: false,
    };
    pub const AD: FlagSet = FlagSet {
        recursion_desired: false,
        authentic_data: true,
        checking_disabled: false,
    };
    pub const CD: FlagSet = FlagSet {
        recursion_desired: false,
        authentic_data: false,
        checking_disabled: true,
    };
}

impl QueryFlags {
    pub fn set_flags(&mut self, flags: FlagSet) {
        self.explicit = Some(flags);
    }

    pub fn effective(&self) -> FlagSet {
        self.explicit.unwrap_or(FlagSet::RD)
    }

    /// Applies the option bundle in `norec`, `dnssec`, `cdflag` order.
    ///
    /// Each enabled option replaces the previous set, so the last one wins.
    /// `norec` maps to RD as observed in production; its polarity is pending
    /// product clarification.
    pub fn from_options(options: &QueryOptions) -> Self {
        let mut flags = Self::default();
        if options.norec {
            flags.set_flags(FlagSet::RD);
        }
        if options.dnssec {
            flags.set_flags(FlagSet::AD);
        }
        if options.cdflag {
            flags.set_flags(FlagSet::CD);
        }
        flags
    }
}
