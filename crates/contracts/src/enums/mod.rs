pub mod category;
pub mod customer_segment;
pub mod payment_method;
pub mod region;
pub mod shipping_type;

pub use category::Category;
pub use customer_segment::CustomerSegment;
pub use payment_method::PaymentMethod;
pub use region::Region;
pub use shipping_type::ShippingType;

use std::fmt::Debug;
use std::hash::Hash;

/// Label of the "no constraint" entry shown first in every filter list.
pub const ALL_LABEL: &str = "All";

/// A categorical column of the sales dataset with a fixed set of values.
///
/// Declaration order of `VALUES` is the canonical order used for grouping
/// and for zero-filled grids.
pub trait Dimension: Debug + Copy + Eq + Ord + Hash + 'static {
    /// Column header as it appears in exports ("Region", "Payment Method", ...)
    const COLUMN: &'static str;
    const VALUES: &'static [Self];

    /// Human readable label, identical to the serialized form
    fn label(&self) -> &'static str;

    fn from_label(label: &str) -> Option<Self> {
        Self::VALUES.iter().copied().find(|v| v.label() == label)
    }

    /// Labels sorted alphabetically, as offered in filter lists
    fn sorted_labels() -> Vec<&'static str> {
        let mut labels: Vec<&'static str> = Self::VALUES.iter().map(|v| v.label()).collect();
        labels.sort_unstable();
        labels
    }
}
