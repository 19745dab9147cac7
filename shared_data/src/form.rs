//! The quote form controller: field values as they sit in the inputs, the
//! per-field error messages, and the submission lifecycle. Everything here is
//! pure - the network call and the dismiss timers belong to whoever drives
//! this (the yew component, or a test poking at it directly).

use crate::{ProductType, Quantity, QuoteRequest, format_phone, validate_email, validate_phone};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum QuoteField {
	Name,
	Company,
	Email,
	Phone,
	ProductType,
	Quantity,
	Message
}

/// One fixed message per required field, or None when the field is currently
/// fine. Optional fields can't error so they don't appear here.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
	pub name: Option<&'static str>,
	pub company: Option<&'static str>,
	pub email: Option<&'static str>,
	pub phone: Option<&'static str>,
	pub product_type: Option<&'static str>
}

impl FieldErrors {
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.name.is_none()
			&& self.company.is_none()
			&& self.email.is_none()
			&& self.phone.is_none()
			&& self.product_type.is_none()
	}

	fn clear(&mut self, field: QuoteField) {
		match field {
			QuoteField::Name => self.name = None,
			QuoteField::Company => self.company = None,
			QuoteField::Email => self.email = None,
			QuoteField::Phone => self.phone = None,
			QuoteField::ProductType => self.product_type = None,
			// nothing to clear for the optional fields
			QuoteField::Quantity | QuoteField::Message => {}
		}
	}
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
	#[default]
	Idle,
	Submitting,
	Succeeded,
	Failed
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuoteForm {
	pub name: String,
	pub company: String,
	pub email: String,
	pub phone: String,
	// the select values exactly as the DOM hands them over; parsed into their
	// enums when the record is built
	pub product_type: String,
	pub quantity: String,
	pub message: String,
	pub errors: FieldErrors,
	pub status: SubmitStatus
}

impl QuoteForm {
	/// Stores a keystroke (or select change). The phone field is run through
	/// the live mask, and whatever error the field was carrying is cleared so
	/// the user isn't yelled at while fixing it.
	pub fn edit(&mut self, field: QuoteField, value: String) {
		match field {
			QuoteField::Name => self.name = value,
			QuoteField::Company => self.company = value,
			QuoteField::Email => self.email = value,
			QuoteField::Phone => self.phone = format_phone(&value),
			QuoteField::ProductType => self.product_type = value,
			QuoteField::Quantity => self.quantity = value,
			QuoteField::Message => self.message = value
		}

		self.errors.clear(field);
	}

	/// Runs full validation and, if everything holds, flips to `Submitting`
	/// and hands back the normalized record for exactly one insert call.
	/// Returns None - with `errors` populated and no other side effect - when
	/// any required field is missing or invalid, and also while an earlier
	/// submission is still in flight so we never have two pending inserts.
	pub fn try_begin_submit(&mut self) -> Option<QuoteRequest> {
		if self.status == SubmitStatus::Submitting {
			return None;
		}

		self.errors = self.validate();
		if !self.errors.is_empty() {
			return None;
		}

		let record = self.to_record()?;
		self.status = SubmitStatus::Submitting;
		Some(record)
	}

	/// Resolves the in-flight insert. Success wipes the fields for the next
	/// lead and shows the thank-you state; failure keeps everything the user
	/// typed so they can just hit submit again.
	pub fn finish_submit(&mut self, succeeded: bool) {
		if succeeded {
			self.name.clear();
			self.company.clear();
			self.email.clear();
			self.phone.clear();
			self.product_type.clear();
			self.quantity.clear();
			self.message.clear();
			self.status = SubmitStatus::Succeeded;
		} else {
			self.status = SubmitStatus::Failed;
		}
	}

	/// Hides the success/failure banner once its timer fires. Field values
	/// and any lingering field errors are left exactly as they are.
	pub fn dismiss_status(&mut self) {
		if matches!(self.status, SubmitStatus::Succeeded | SubmitStatus::Failed) {
			self.status = SubmitStatus::Idle;
		}
	}

	fn validate(&self) -> FieldErrors {
		let mut errors = FieldErrors::default();

		if self.name.trim().is_empty() {
			errors.name = Some("Name is required");
		}

		if self.company.trim().is_empty() {
			errors.company = Some("Company is required");
		}

		if self.email.trim().is_empty() {
			errors.email = Some("Email is required");
		} else if !validate_email(self.email.trim()) {
			errors.email = Some("Please enter a valid email address");
		}

		if self.phone.trim().is_empty() {
			errors.phone = Some("Phone number is required");
		} else if !validate_phone(&self.phone) {
			errors.phone = Some("Please enter a valid 10-digit phone number");
		}

		if ProductType::from_value(&self.product_type).is_none() {
			errors.product_type = Some("Please select a product type");
		}

		errors
	}

	// Only sound after validate() came back clean; the Option is just so a
	// select value that somehow doesn't parse can't panic us.
	fn to_record(&self) -> Option<QuoteRequest> {
		let message = self.message.trim();

		Some(QuoteRequest {
			name: self.name.trim().to_string(),
			company: self.company.trim().to_string(),
			email: self.email.trim().to_string(),
			phone: self.phone.trim().to_string(),
			product_type: ProductType::from_value(&self.product_type)?,
			quantity: Quantity::from_value(&self.quantity),
			message: (!message.is_empty()).then(|| message.to_string())
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn filled_form() -> QuoteForm {
		let mut form = QuoteForm::default();
		form.edit(QuoteField::Name, "  John Smith ".into());
		form.edit(QuoteField::Company, "ABC Construction".into());
		form.edit(QuoteField::Email, "john@company.com".into());
		form.edit(QuoteField::Phone, "2672121034".into());
		form.edit(QuoteField::ProductType, "hydraulic-oil".into());
		form
	}

	#[test]
	fn empty_submit_fills_every_error_and_calls_nothing() {
		let mut form = QuoteForm::default();

		assert_eq!(form.try_begin_submit(), None);
		assert_eq!(form.status, SubmitStatus::Idle);
		assert_eq!(form.errors.name, Some("Name is required"));
		assert_eq!(form.errors.company, Some("Company is required"));
		assert_eq!(form.errors.email, Some("Email is required"));
		assert_eq!(form.errors.phone, Some("Phone number is required"));
		assert_eq!(form.errors.product_type, Some("Please select a product type"));
	}

	#[test]
	fn malformed_fields_get_their_specific_messages() {
		let mut form = filled_form();
		form.edit(QuoteField::Email, "john@company".into());
		form.edit(QuoteField::Phone, "26721210".into());

		assert_eq!(form.try_begin_submit(), None);
		assert_eq!(form.errors.email, Some("Please enter a valid email address"));
		assert_eq!(form.errors.phone, Some("Please enter a valid 10-digit phone number"));
		assert_eq!(form.errors.name, None);
	}

	#[test]
	fn editing_a_field_clears_only_its_error() {
		let mut form = QuoteForm::default();
		assert_eq!(form.try_begin_submit(), None);

		form.edit(QuoteField::Name, "J".into());

		assert_eq!(form.errors.name, None);
		assert_eq!(form.errors.company, Some("Company is required"));
	}

	#[test]
	fn phone_edits_go_through_the_live_mask() {
		let mut form = QuoteForm::default();
		form.edit(QuoteField::Phone, "2672121034".into());
		assert_eq!(form.phone, "(267) 212-1034");
	}

	#[test]
	fn valid_submit_yields_one_normalized_record() {
		let mut form = filled_form();

		let record = form.try_begin_submit().unwrap();
		assert_eq!(form.status, SubmitStatus::Submitting);
		assert!(form.errors.is_empty());

		assert_eq!(record.name, "John Smith");
		assert_eq!(record.phone, "(267) 212-1034");
		assert_eq!(record.product_type, ProductType::HydraulicOil);
		// optionals left blank come through as absent, not empty strings
		assert_eq!(record.quantity, None);
		assert_eq!(record.message, None);
	}

	#[test]
	fn optionals_are_carried_when_filled_in() {
		let mut form = filled_form();
		form.edit(QuoteField::Quantity, "275-gal-totes".into());
		form.edit(QuoteField::Message, "  current supplier charges too much  ".into());

		let record = form.try_begin_submit().unwrap();
		assert_eq!(record.quantity, Some(Quantity::Totes275));
		assert_eq!(record.message, Some("current supplier charges too much".to_string()));
	}

	#[test]
	fn second_submit_while_in_flight_is_ignored() {
		let mut form = filled_form();

		assert!(form.try_begin_submit().is_some());
		assert_eq!(form.try_begin_submit(), None);
		assert_eq!(form.status, SubmitStatus::Submitting);
		// and the gate didn't scribble errors over a valid form
		assert!(form.errors.is_empty());
	}

	#[test]
	fn success_resets_the_fields_and_then_dismisses() {
		let mut form = filled_form();
		form.try_begin_submit().unwrap();

		form.finish_submit(true);
		assert_eq!(form.status, SubmitStatus::Succeeded);
		assert_eq!(form.name, "");
		assert_eq!(form.phone, "");
		assert_eq!(form.product_type, "");

		form.dismiss_status();
		assert_eq!(form.status, SubmitStatus::Idle);
		assert_eq!(form.name, "");
	}

	#[test]
	fn failure_keeps_the_fields_and_then_dismisses() {
		let mut form = filled_form();
		form.try_begin_submit().unwrap();

		form.finish_submit(false);
		assert_eq!(form.status, SubmitStatus::Failed);
		assert_eq!(form.name, "  John Smith ");
		assert_eq!(form.phone, "(267) 212-1034");

		form.dismiss_status();
		assert_eq!(form.status, SubmitStatus::Idle);
		assert_eq!(form.name, "  John Smith ");
	}

	#[test]
	fn resubmit_after_failure_works() {
		let mut form = filled_form();
		form.try_begin_submit().unwrap();
		form.finish_submit(false);
		form.dismiss_status();

		// no retry happens on its own, but the user can just try again
		assert!(form.try_begin_submit().is_some());
		assert_eq!(form.status, SubmitStatus::Submitting);
	}

	#[test]
	fn dismiss_is_a_noop_outside_the_banner_states() {
		let mut form = filled_form();
		form.dismiss_status();
		assert_eq!(form.status, SubmitStatus::Idle);

		form.try_begin_submit().unwrap();
		form.dismiss_status();
		assert_eq!(form.status, SubmitStatus::Submitting);
	}
}
