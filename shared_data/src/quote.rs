/// One captured lead, exactly as it goes over the wire to the lead store.
/// The store stamps `created_at` itself when the row is inserted, so the
/// record doesn't carry a timestamp.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct QuoteRequest {
	pub name: String,
	pub company: String,
	pub email: String,
	pub phone: String,
	pub product_type: ProductType,
	// empty selections and messages are normalized to None before this struct
	// is ever built, never stored as empty strings
	pub quantity: Option<Quantity>,
	pub message: Option<String>,
}

#[derive(serde::Serialize, serde::Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ProductType {
	HydraulicOil,
	EngineOil,
	IndustrialGrease,
	DefAdblue,
	Other
}

impl ProductType {
	pub const ALL: [Self; 5] = [
		Self::HydraulicOil,
		Self::EngineOil,
		Self::IndustrialGrease,
		Self::DefAdblue,
		Self::Other
	];

	/// The value that sits in the `<select>` and in the database column
	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::HydraulicOil => "hydraulic-oil",
			Self::EngineOil => "engine-oil",
			Self::IndustrialGrease => "industrial-grease",
			Self::DefAdblue => "def-adblue",
			Self::Other => "other"
		}
	}

	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Self::HydraulicOil => "Hydraulic Oil",
			Self::EngineOil => "Engine Oil",
			Self::IndustrialGrease => "Industrial Grease",
			Self::DefAdblue => "DEF / AdBlue",
			Self::Other => "Other"
		}
	}

	#[must_use]
	pub fn from_value(value: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|p| p.as_str() == value)
	}
}

#[derive(serde::Serialize, serde::Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Quantity {
	#[serde(rename = "55-gal-drums")]
	Drums55,
	#[serde(rename = "275-gal-totes")]
	Totes275,
	BulkDelivery,
	Custom
}

impl Quantity {
	pub const ALL: [Self; 4] = [
		Self::Drums55,
		Self::Totes275,
		Self::BulkDelivery,
		Self::Custom
	];

	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Drums55 => "55-gal-drums",
			Self::Totes275 => "275-gal-totes",
			Self::BulkDelivery => "bulk-delivery",
			Self::Custom => "custom"
		}
	}

	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Self::Drums55 => "55-Gallon Drums",
			Self::Totes275 => "275-Gallon Totes",
			Self::BulkDelivery => "Bulk Delivery",
			Self::Custom => "Custom Amount"
		}
	}

	#[must_use]
	pub fn from_value(value: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|q| q.as_str() == value)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	// the select values, the db column values, and the serde wire values all
	// have to agree, so check them against each other
	#[test]
	fn wire_values_match_select_values() {
		for product in ProductType::ALL {
			let json = format!("\"{}\"", product.as_str());
			assert_eq!(serde_json::to_string(&product).unwrap(), json);
			assert_eq!(serde_json::from_str::<ProductType>(&json).unwrap(), product);
			assert_eq!(ProductType::from_value(product.as_str()), Some(product));
		}

		for quantity in Quantity::ALL {
			let json = format!("\"{}\"", quantity.as_str());
			assert_eq!(serde_json::to_string(&quantity).unwrap(), json);
			assert_eq!(serde_json::from_str::<Quantity>(&json).unwrap(), quantity);
			assert_eq!(Quantity::from_value(quantity.as_str()), Some(quantity));
		}
	}

	#[test]
	fn unknown_values_are_rejected() {
		assert_eq!(ProductType::from_value(""), None);
		assert_eq!(ProductType::from_value("crude-oil"), None);
		assert_eq!(Quantity::from_value(""), None);
		assert_eq!(Quantity::from_value("55-gal"), None);
	}
}
