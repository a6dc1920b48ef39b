use contracts::dashboards::d400_sales_analytics::{FilterOptions, SalesFilter};
use contracts::domain::a001_sales_order::aggregate::SalesOrder;
use contracts::enums::{
    Category, CustomerSegment, Dimension, PaymentMethod, Region, ALL_LABEL,
};
use std::collections::BTreeSet;

/// Allowed values of one dimension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T: Dimension> {
    /// No constraint
    All,
    /// Only these values. Never empty: an empty set is represented as `All`.
    Only(BTreeSet<T>),
}

impl<T: Dimension> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T: Dimension> Selection<T> {
    /// Interpret the labels picked in a multi-select.
    ///
    /// The list means "no constraint" when it is empty, contains the "All"
    /// label (any case), or contains nothing but unknown labels. Unknown
    /// labels next to known ones are dropped.
    pub fn parse(labels: &[String]) -> Self {
        if labels.iter().any(|l| l.trim().eq_ignore_ascii_case(ALL_LABEL)) {
            return Selection::All;
        }

        let mut allowed = BTreeSet::new();
        for label in labels {
            match T::from_label(label.trim()) {
                Some(value) => {
                    allowed.insert(value);
                }
                None => tracing::warn!("Ignoring unknown {} filter value '{}'", T::COLUMN, label),
            }
        }
        Self::only(allowed)
    }

    pub fn only(values: impl IntoIterator<Item = T>) -> Self {
        let allowed: BTreeSet<T> = values.into_iter().collect();
        if allowed.is_empty() {
            Selection::All
        } else {
            Selection::Only(allowed)
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    pub fn matches(&self, value: T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(allowed) => allowed.contains(&value),
        }
    }
}

/// Typed selection over the four filterable dimensions, combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderSelection {
    pub region: Selection<Region>,
    pub category: Selection<Category>,
    pub payment_method: Selection<PaymentMethod>,
    pub customer_segment: Selection<CustomerSegment>,
}

impl OrderSelection {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn is_all(&self) -> bool {
        self.region.is_all()
            && self.category.is_all()
            && self.payment_method.is_all()
            && self.customer_segment.is_all()
    }

    pub fn matches(&self, order: &SalesOrder) -> bool {
        self.region.matches(order.region)
            && self.category.matches(order.category)
            && self.payment_method.matches(order.payment_method)
            && self.customer_segment.matches(order.customer_segment)
    }
}

impl From<&SalesFilter> for OrderSelection {
    fn from(filter: &SalesFilter) -> Self {
        Self {
            region: Selection::parse(&filter.region),
            category: Selection::parse(&filter.category),
            payment_method: Selection::parse(&filter.payment_method),
            customer_segment: Selection::parse(&filter.customer_segment),
        }
    }
}

/// Orders matching `selection`, in input order.
///
/// Accepts the full dataset (`&[SalesOrder]`) as well as an already filtered
/// view (`view.iter().copied()`). The source is only borrowed.
pub fn apply<'a, I>(records: I, selection: &OrderSelection) -> Vec<&'a SalesOrder>
where
    I: IntoIterator<Item = &'a SalesOrder>,
{
    records
        .into_iter()
        .filter(|order| selection.matches(order))
        .collect()
}

/// Choices for every multi-select: "All" first, then labels A-Z
pub fn filter_options() -> FilterOptions {
    FilterOptions {
        region: options_for::<Region>(),
        category: options_for::<Category>(),
        payment_method: options_for::<PaymentMethod>(),
        customer_segment: options_for::<CustomerSegment>(),
    }
}

fn options_for<T: Dimension>() -> Vec<String> {
    std::iter::once(ALL_LABEL)
        .chain(T::sorted_labels())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{north_north_south, sample_dataset};
    use super::*;

    fn labels(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn same_orders(a: &[&SalesOrder], b: &[&SalesOrder]) -> bool {
        a.len() == b.len() && a.iter().zip(b).all(|(x, y)| std::ptr::eq(*x, *y))
    }

    #[test]
    fn test_parse_all_and_empty() {
        assert!(Selection::<Region>::parse(&[]).is_all());
        assert!(Selection::<Region>::parse(&labels(&["All"])).is_all());
        assert!(Selection::<Region>::parse(&labels(&["North", "all"])).is_all());
    }

    #[test]
    fn test_parse_unknown_labels() {
        assert!(Selection::<Region>::parse(&labels(&["Atlantis"])).is_all());
        assert_eq!(
            Selection::<Region>::parse(&labels(&["Atlantis", "South"])),
            Selection::only([Region::South])
        );
    }

    #[test]
    fn test_parse_multi_word_labels() {
        assert_eq!(
            Selection::<PaymentMethod>::parse(&labels(&["Cash on Delivery", "PayPal"])),
            Selection::only([PaymentMethod::CashOnDelivery, PaymentMethod::PayPal])
        );
    }

    #[test]
    fn test_region_south_example() {
        let orders = north_north_south();
        let selection = OrderSelection {
            region: Selection::only([Region::South]),
            ..OrderSelection::all()
        };
        let filtered = apply(&orders, &selection);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].sales, 5.0);
    }

    #[test]
    fn test_all_selection_returns_everything_in_order() {
        let orders = sample_dataset(300);
        let everything: Vec<&SalesOrder> = orders.iter().collect();

        let filtered = apply(&orders, &OrderSelection::all());
        assert!(same_orders(&filtered, &everything));

        let from_empty = OrderSelection::from(&SalesFilter::default());
        assert!(from_empty.is_all());
        assert!(same_orders(&apply(&orders, &from_empty), &everything));
    }

    #[test]
    fn test_filter_is_subset_and_idempotent() {
        let orders = sample_dataset(500);
        let filter = SalesFilter {
            region: labels(&["North", "East"]),
            category: labels(&["Books", "Toys", "Electronics"]),
            payment_method: vec![],
            customer_segment: labels(&["Corporate"]),
        };
        let selection = OrderSelection::from(&filter);

        let once = apply(&orders, &selection);
        assert!(once.len() <= orders.len());
        assert!(!once.is_empty());
        assert!(once.iter().all(|o| selection.matches(o)));
        assert!(once
            .iter()
            .all(|o| matches!(o.region, Region::North | Region::East)
                && o.customer_segment == CustomerSegment::Corporate));

        let twice = apply(once.iter().copied(), &selection);
        assert!(same_orders(&once, &twice));
    }

    #[test]
    fn test_dimensions_combine_with_and() {
        let orders = sample_dataset(400);
        let by_region = OrderSelection {
            region: Selection::only([Region::West]),
            ..OrderSelection::all()
        };
        let by_both = OrderSelection {
            region: Selection::only([Region::West]),
            category: Selection::only([Category::Sports]),
            ..OrderSelection::all()
        };
        let west = apply(&orders, &by_region);
        let west_sports = apply(&orders, &by_both);
        assert!(west_sports.len() <= west.len());
        assert_eq!(
            west_sports.len(),
            west.iter().filter(|o| o.category == Category::Sports).count()
        );
    }

    #[test]
    fn test_empty_input() {
        let selection = OrderSelection {
            region: Selection::only([Region::North]),
            ..OrderSelection::all()
        };
        let empty: Vec<SalesOrder> = Vec::new();
        assert!(apply(&empty, &selection).is_empty());
    }

    #[test]
    fn test_filter_options() {
        let options = filter_options();
        assert_eq!(options.region, labels(&["All", "East", "North", "South", "West"]));
        assert_eq!(options.customer_segment[0], "All");
        assert_eq!(options.category.len(), Category::VALUES.len() + 1);
    }
}
