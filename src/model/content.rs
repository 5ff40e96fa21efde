//! Post office records and the name filter applied over them

/// One post office entry as returned for a pincode
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostOfficeRecord {
    pub name: String,
    pub pincode: String,
    pub district: String,
    pub state: String,
    pub branch_type: Option<String>,
    pub delivery_status: Option<String>,
    pub division: Option<String>,
    pub region: Option<String>,
    pub circle: Option<String>,
    pub block: Option<String>,
    pub country: Option<String>,
}

impl PostOfficeRecord {
    pub fn new(name: &str, pincode: &str, district: &str, state: &str) -> Self {
        Self {
            name: name.to_string(),
            pincode: pincode.to_string(),
            district: district.to_string(),
            state: state.to_string(),
            ..Default::default()
        }
    }

    /// Case-insensitive substring match against the name only
    pub fn name_matches(&self, needle_lower: &str) -> bool {
        needle_lower.is_empty() || self.name.to_lowercase().contains(needle_lower)
    }

    /// Optional provider fields that are present, as (label, value) pairs
    pub fn details(&self) -> Vec<(&'static str, &str)> {
        [
            ("Branch type", &self.branch_type),
            ("Delivery", &self.delivery_status),
            ("Division", &self.division),
            ("Region", &self.region),
            ("Circle", &self.circle),
            ("Block", &self.block),
            ("Country", &self.country),
        ]
        .into_iter()
        .filter_map(|(label, value)| {
            value
                .as_deref()
                .filter(|v| !v.trim().is_empty())
                .map(|v| (label, v))
        })
        .collect()
    }
}

/// Indices into `records` whose name contains `filter`, in original order
pub fn filter_by_name(records: &[PostOfficeRecord], filter: &str) -> Vec<usize> {
    let needle = filter.to_lowercase();
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| record.name_matches(&needle))
        .map(|(i, _)| i)
        .collect()
}
