//! The field checks and the live phone mask for the quote form. All of these
//! are total functions over arbitrary text - they never panic and never touch
//! anything outside their arguments, so the form controller can call them on
//! every keystroke without ceremony.

/// Permissive `local@domain.tld` shape check. This is intentionally not
/// RFC-exact - it just catches the obvious typos before we bother the lead
/// store with them.
#[must_use]
pub fn validate_email(email: &str) -> bool {
	if email.chars().any(char::is_whitespace) {
		return false;
	}

	let Some((local, domain)) = email.split_once('@') else {
		return false;
	};

	// split_once only peels off the first '@', so make sure there wasn't a
	// second one hiding in the domain
	if local.is_empty() || domain.contains('@') {
		return false;
	}

	matches!(domain.rsplit_once('.'), Some((host, tld)) if !host.is_empty() && !tld.is_empty())
}

/// US-format check: exactly 10 digits once every non-digit is stripped.
/// We don't care whether the area code actually exists.
#[must_use]
pub fn validate_phone(phone: &str) -> bool {
	phone.chars().filter(char::is_ascii_digit).count() == 10
}

/// Reformats the phone field as the user types, masking progressively:
/// `267` -> `267`, `2672` -> `(267) 2`, `2672121034` -> `(267) 212-1034`.
/// Anything past 10 digits is dropped. Input with no digits at all is
/// returned untouched so we never clobber an empty field.
///
/// Feeding the output back in yields the same string once the number is
/// complete, which is what lets us run it on every keystroke.
#[must_use]
pub fn format_phone(phone: &str) -> String {
	let digits = phone.chars()
		.filter(char::is_ascii_digit)
		.take(10)
		.collect::<String>();

	match digits.len() {
		0 => phone.to_string(),
		1..=3 => digits,
		4..=6 => format!("({}) {}", &digits[..3], &digits[3..]),
		_ => format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..])
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn emails_need_an_at_and_a_dotted_domain() {
		assert!(validate_email("a@b.com"));
		assert!(validate_email("first.last@sub.domain.co"));

		assert!(!validate_email(""));
		assert!(!validate_email("a@b"));
		assert!(!validate_email("ab.com"));
		assert!(!validate_email("@b.com"));
		assert!(!validate_email("a@.com"));
		assert!(!validate_email("a@b."));
		assert!(!validate_email("a b@c.com"));
		assert!(!validate_email("a@b@c.com"));
	}

	#[test]
	fn phones_need_exactly_ten_digits() {
		assert!(validate_phone("2672121034"));
		assert!(validate_phone("(267) 212-1034"));
		assert!(validate_phone("267-212-1034 "));

		assert!(!validate_phone(""));
		assert!(!validate_phone("26721210"));
		assert!(!validate_phone("26721210345"));
		assert!(!validate_phone("call me maybe"));
	}

	#[test]
	fn phone_masks_progressively() {
		assert_eq!(format_phone("2"), "2");
		assert_eq!(format_phone("267"), "267");
		assert_eq!(format_phone("2672"), "(267) 2");
		assert_eq!(format_phone("267212"), "(267) 212");
		assert_eq!(format_phone("2672121"), "(267) 212-1");
		assert_eq!(format_phone("2672121034"), "(267) 212-1034");
	}

	#[test]
	fn phone_mask_ignores_existing_punctuation() {
		assert_eq!(format_phone("(267) 212-1034"), "(267) 212-1034");
		assert_eq!(format_phone("267.212.1034"), "(267) 212-1034");
	}

	#[test]
	fn phone_mask_truncates_past_ten_digits() {
		assert_eq!(format_phone("26721210349999"), "(267) 212-1034");
	}

	#[test]
	fn phone_mask_leaves_digitless_input_alone() {
		assert_eq!(format_phone(""), "");
		assert_eq!(format_phone("abc"), "abc");
	}

	#[test]
	fn phone_mask_is_idempotent() {
		for input in ["26", "26721", "26721210", "2672121034", "267212103499"] {
			let once = format_phone(input);
			assert_eq!(format_phone(&once), once);
		}
	}
}
