mod quote;
pub use quote::{ProductType, Quantity, QuoteRequest};

mod validation;
pub use validation::{format_phone, validate_email, validate_phone};

mod form;
pub use form::{FieldErrors, QuoteField, QuoteForm, SubmitStatus};

pub static BASE_STYLE: &str = r"
* {
	--body-background: #10151c;
	--main-text: #f2f4f7;
	--secondary-text: #9aa7b5;
	--main-background: #1a222c;
	--accent: #f59e0b;
	--accent-text: #10151c;
	--border-color: #2e3a48;
	--error-text: #f87171;
	--success-text: #4ade80;
	font-family: Arial, sans-serif;
	color: var(--main-text);
}
body {
	background-color: var(--body-background);
	margin: 0;
}
input, textarea, select {
	background-color: var(--main-background);
	color: var(--main-text);
	border: 1px solid var(--border-color);
	border-radius: 4px;
	padding: 8px 10px;
}
textarea {
	resize: vertical;
}
button {
	background-color: var(--accent);
	color: var(--accent-text);
	border: 1px solid var(--accent);
	border-radius: 4px;
	padding: 10px 16px;
	font-weight: bold;
}
button:disabled {
	opacity: 0.6;
}
a.call-link {
	color: var(--accent);
	text-decoration: none;
	font-weight: bold;
}
";
