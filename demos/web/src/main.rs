use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use anyhow::{Context, Result};
use condensed_iupac::*;
use serde::{Deserialize, Serialize};
use tracing::*;

const ADDRESS: &str = "127.0.0.1:8080";

#[derive(Serialize, Deserialize)]
struct FormulaRequest {
    formula: String,
}

/// JSON reply for `/get_iupac`. `output` mirrors what the `iupac` command
/// prints: the pipeline trace followed by the name line, if any.
#[derive(Debug, Default, Serialize, Deserialize)]
struct IupacResponse {
    output: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    issues: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    error: Option<String>,
}

/// Names one formula line and collects the trace, the same way the
/// command-line front end does.
fn describe(formula: &str) -> IupacResponse {
    let line = formula.trim();
    let mut report = TraceReport::new();
    let result = iupac_name_observed(line, &mut report);

    let mut response = IupacResponse {
        output: format!("{}\n", report.as_str()),
        ..IupacResponse::default()
    };
    match result {
        Ok(name) => {
            let label = if split_ether(line).is_some() {
                "IUPAC NAME"
            } else {
                "IUPAC Name"
            };
            response.output.push_str(&format!("{label}: {name}\n"));
            response.issues = name.issues.iter().map(ToString::to_string).collect();
            response.name = Some(name.text);
        }
        Err(e) => {
            warn!("{}: {}", line, e);
            response.error = Some(e.to_string());
        }
    }
    response
}

const PAGE: &str = r#"<!DOCTYPE html>
<html>
	<head>
		<meta charset="utf-8">
		<title>Condensed Formula Namer</title>
		<style>
			body {
				font-family: 'Helvetica Neue', Helvetica, Arial, sans-serif;
				background: #f5f7fa;
				color: #333;
				margin: 20px;
			}
			.container {
				max-width: 800px;
				margin: 50px auto;
				background: #ffffff;
				padding: 40px;
				border-radius: 8px;
				box-shadow: 0 2px 10px rgba(0, 0, 0, 0.1);
			}
			h1 { text-align: center; }
			form { display: flex; gap: 10px; }
			input[type="text"] { flex: 1; padding: 10px; font-size: 1rem; }
			input[type="submit"] {
				padding: 10px 20px;
				background-color: #007BFF;
				color: #fff;
				border: none;
				border-radius: 4px;
				cursor: pointer;
			}
			pre { background: #f0f0f0; padding: 15px; border-radius: 4px; white-space: pre-wrap; }
			.name { font-size: 1.5rem; font-weight: bold; margin-top: 20px; }
			.error { color: #b00020; }
		</style>
		<script>
			async function nameFormula(event) {
				event.preventDefault();
				const formula = document.getElementById('formula').value;
				const reply = await fetch('/get_iupac', {
					method: 'POST',
					headers: { 'Content-Type': 'application/json' },
					body: JSON.stringify({ formula }),
				}).then(r => r.json());

				document.getElementById('name').textContent = reply.name || '';
				document.getElementById('error').textContent = reply.error || '';
				document.getElementById('output').textContent = reply.output || '';
			}
		</script>
	</head>
	<body>
		<div class="container">
			<h1>Condensed Formula Namer</h1>
			<form onsubmit="nameFormula(event)">
				<input type="text" id="formula" placeholder="CH3CH(CH3)CH2CH3 or CCC-O-CC" required>
				<input type="submit" value="Name">
			</form>
			<div class="name" id="name"></div>
			<div class="error" id="error"></div>
			<pre id="output"></pre>
		</div>
	</body>
</html>
"#;

/// Renders the input form.
async fn index() -> impl Responder {
    HttpResponse::Ok().content_type("text/html").body(PAGE)
}

async fn get_iupac(request: web::Json<FormulaRequest>) -> impl Responder {
    info!("Naming {:?}", request.formula);
    HttpResponse::Ok().json(describe(&request.formula))
}

fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/get_iupac", web::post().to(get_iupac));
}

#[actix_web::main]
async fn main() -> Result<()> {
    init_logging("info");

    info!("Serving on http://{}", ADDRESS);
    HttpServer::new(|| App::new().configure(routes))
        .bind(ADDRESS)
        .with_context(|| format!("Failed to bind {ADDRESS}"))?
        .run()
        .await
        .context("Server stopped with an error")
}
