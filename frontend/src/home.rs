use yew::prelude::*;

use crate::quote_form::QuoteFormSection;
use crate::style::SharedStyle;

const PHONE_DISPLAY: &str = "(267) 212-1034";
const PHONE_HREF: &str = "tel:+1-267-212-1034";

// label, blurb - the product grid is pure marketing copy, the real
// enumeration lives in shared_data
const PRODUCTS: [(&str, &str); 5] = [
	("Hydraulic Oil", "AW 32/46/68 hydraulic fluids by the drum, tote, or tanker."),
	("Engine Oil", "Heavy-duty diesel engine oils for mixed fleets."),
	("Industrial Grease", "EP lithium and synthetic greases for plant equipment."),
	("DEF / AdBlue", "API-certified diesel exhaust fluid in bulk."),
	("Other", "Gear oils, compressor oils, and everything in between.")
];

#[function_component(Home)]
pub fn home() -> Html {
	html! {
		<>
			<SharedStyle />
			<style>
			{
				"
				.section {
					max-width: 960px;
					margin: 0 auto;
					padding: 48px 20px;
				}
				#hero {
					text-align: center;
					padding-top: 80px;
				}
				#hero h1 {
					font-size: 2.6rem;
					margin-bottom: 8px;
				}
				#hero .tagline {
					color: var(--secondary-text);
					font-size: 1.2rem;
					margin-bottom: 24px;
				}
				.product-grid {
					display: grid;
					grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
					gap: 16px;
				}
				.product-card {
					background-color: var(--main-background);
					border: 1px solid var(--border-color);
					border-radius: 8px;
					padding: 16px 20px;
				}
				.product-card p {
					color: var(--secondary-text);
				}
				#contact {
					text-align: center;
					color: var(--secondary-text);
				}
				"
			}
			</style>

			<section class="section" id="hero">
				<h1>{ "Houston Bulk Oil" }</h1>
				<p class="tagline">{ "Direct manufacturer pricing on bulk lubricants. No brokers, no markup." }</p>
				<a class="call-link" href={ PHONE_HREF }>{ format!("Call {PHONE_DISPLAY}") }</a>
			</section>

			<section class="section" id="products">
				<h2>{ "What We Deliver" }</h2>
				<div class="product-grid">
					{
						PRODUCTS.iter().map(|(title, blurb)| html! {
							<div class="product-card">
								<h3>{ *title }</h3>
								<p>{ *blurb }</p>
							</div>
						}).collect::<Html>()
					}
				</div>
			</section>

			<section class="section" id="quote">
				<h2>{ "Get Your Quote" }</h2>
				<QuoteFormSection />
			</section>

			<section class="section" id="contact">
				<p>
					{ "Prefer to talk? " }
					<a class="call-link" href={ PHONE_HREF }>{ PHONE_DISPLAY }</a>
					{ " or " }
					<a class="call-link" href="mailto:sales@houstonbulkoil.com">{ "sales@houstonbulkoil.com" }</a>
				</p>
			</section>
		</>
	}
}
