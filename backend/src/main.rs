use axum::{
	routing::post,
	http::StatusCode,
	Router,
	Json
};
use axum_sqlx_tx::Tx;
use shared_data::{Quantity, QuoteRequest};
use sqlx::{
	query,
	Postgres,
	Row,
	postgres::PgPoolOptions
};
use std::time::{SystemTime, UNIX_EPOCH};
use tower_http::services::ServeDir;
use tracing::{error, info, warn};

macro_rules! log_and_ret{
	($err: expr, $ret_str: expr) => {{
		error!($ret_str);
		return ($err, format!($ret_str));
	}};
	($ret_str:expr) => {
		log_and_ret!(StatusCode::INTERNAL_SERVER_ERROR, $ret_str)
	}
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	tracing_subscriber::fmt::init();

	macro_rules! dotenv_num{
		($key:expr, $default:expr, $type:ident) => {
			dotenv::var($key).ok()
				.and_then(|v| v.parse::<$type>().ok())
				.unwrap_or($default)
		}
	}

	let backend_port = dotenv_num!("BACKEND_PORT", 444, u16);
	let num_connections = dotenv_num!("DB_CONNECTIONS", 8, u32);

	let db_name = dotenv::var("DB_NAME").unwrap_or_else(|_| "leads".into());
	let db_host = dotenv::var("DB_HOST").unwrap_or_else(|_| "localhost".into());
	let db_user = dotenv::var("DB_USER")?;

	let pool = PgPoolOptions::new()
		.max_connections(num_connections)
		.connect(&format!("postgresql://{db_user}@{db_host}/{db_name}"))
		.await?;

	info!("Connected to postgres...");

	// Make sure the table we're writing leads into exists. It's insert-only;
	// nothing in this server ever reads it back out, that's what the sales
	// folks' SQL console is for.
	query("CREATE TABLE IF NOT EXISTS quote_requests (
		id serial PRIMARY KEY,
		created_at BIGINT NOT NULL,
		name text NOT NULL,
		company text NOT NULL,
		email text NOT NULL,
		phone text NOT NULL,
		product_type text NOT NULL,
		quantity text,
		message text
	);").execute(&pool)
		.await?;

	info!("Set up quote_requests table in DB...");

	let (tx_state, tx_layer) = Tx::<Postgres>::setup(pool);

	let mut app = Router::new()
		.route("/api/quote_request", post(submit_quote))
		.layer(tx_layer)
		.with_state(tx_state);

	// Serve the built frontend if it's around; the API still works without it
	let static_dir = dotenv::var("STATIC_DIR").unwrap_or_else(|_| "dist".into());
	if std::fs::metadata(&static_dir).is_ok() {
		app = app.fallback_service(ServeDir::new(&static_dir));
	} else {
		warn!("{static_dir} does not exist, so only the API will be served");
	}

	let addr = format!("127.0.0.1:{backend_port}");
	let listener = tokio::net::TcpListener::bind(&addr).await?;

	info!("Serving axum on {addr}...");

	axum::serve(listener, app).await?;

	Ok(())
}

// The insert contract for the lead store: one normalized record per call,
// 200 with the new row id on success, 500 with a diagnostic otherwise. The
// client already validated and trimmed everything, so this just stamps the
// time and writes the row.
async fn submit_quote(
	mut tx: Tx<Postgres>,
	Json(payload): Json<QuoteRequest>
) -> (StatusCode, String) {
	// Because the UNIX_EPOCH is inherently UTC, the timestamp is for UTC
	let Ok(created_at) = SystemTime::now().duration_since(UNIX_EPOCH).map(|c| c.as_secs() as i64) else {
		return (StatusCode::INTERNAL_SERVER_ERROR, "Time has gone backwards, somehow".into())
	};

	info!(
		company = %payload.company,
		product = payload.product_type.as_str(),
		"New quote request coming in"
	);

	query("INSERT INTO quote_requests
		(created_at, name, company, email, phone, product_type, quantity, message)
		VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
		RETURNING id
	;").bind(created_at)
		.bind(&payload.name)
		.bind(&payload.company)
		.bind(&payload.email)
		.bind(&payload.phone)
		.bind(payload.product_type.as_str())
		.bind(payload.quantity.map(Quantity::as_str))
		.bind(payload.message.as_deref())
		.fetch_one(&mut tx)
		.await
		.map_or_else(
			|e| log_and_ret!("Failed to store quote request: {e:?}"),
			|r| r.try_get::<i32, _>("id")
				.map_or_else(
					|e| log_and_ret!(StatusCode::CREATED, "Quote request stored but returned no id: {e:?}"),
					|i| (StatusCode::OK, i.to_string())
				)
		)
}
