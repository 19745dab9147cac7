use gloo_net::http::Request;
use shared_data::QuoteRequest;
use yew::AttrValue;

/// The one place captured leads go. This is just a thin HTTP client over the
/// insert endpoint; it's handed to the form component as a prop so the page
/// decides where leads land instead of the form reaching for a global.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeadStore {
	endpoint: Option<AttrValue>
}

impl Default for LeadStore {
	fn default() -> Self {
		Self { endpoint: Some(AttrValue::Static("/api/quote_request")) }
	}
}

impl LeadStore {
	/// A store with nowhere to put leads. Every insert fails with
	/// `NotConfigured`, which the form surfaces the same as any other
	/// failure - the user still gets pointed at the phone number.
	#[must_use]
	pub fn unconfigured() -> Self {
		Self { endpoint: None }
	}

	pub async fn insert(&self, record: &QuoteRequest) -> Result<(), LeadStoreError> {
		let Some(endpoint) = &self.endpoint else {
			return Err(LeadStoreError::NotConfigured);
		};

		let request = Request::post(endpoint)
			.json(record)
			.map_err(|e| LeadStoreError::Network(format!("record couldn't be serialized: {e:?}")))?;

		match request.send().await {
			Err(err) => Err(LeadStoreError::Network(format!("{err:?}"))),
			Ok(res) if res.ok() => Ok(()),
			Ok(res) => {
				let status = res.status();
				let text = res.text().await.unwrap_or_else(|e| format!("couldn't get text: {e:?}"));
				Err(LeadStoreError::Rejected(status, text))
			}
		}
	}
}

// The form treats all of these identically (the submission just failed), but
// they're kept apart so the console says which one actually happened.
#[derive(Debug)]
pub enum LeadStoreError {
	NotConfigured,
	Network(String),
	Rejected(u16, String)
}
