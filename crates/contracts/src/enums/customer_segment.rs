use serde::{Deserialize, Serialize};

use super::Dimension;

/// Customer segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CustomerSegment {
    Consumer,
    Corporate,
    #[serde(rename = "Home Office")]
    HomeOffice,
}

impl Dimension for CustomerSegment {
    const COLUMN: &'static str = "Customer Segment";
    const VALUES: &'static [Self] = &[
        CustomerSegment::Consumer,
        CustomerSegment::Corporate,
        CustomerSegment::HomeOffice,
    ];

    fn label(&self) -> &'static str {
        match self {
            CustomerSegment::Consumer => "Consumer",
            CustomerSegment::Corporate => "Corporate",
            CustomerSegment::HomeOffice => "Home Office",
        }
    }
}

impl std::fmt::Display for CustomerSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
