use std::fs;
use std::path::Path;

use actix_multipart::Multipart;
use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{HttpResponse, Responder, web};
use futures_util::TryStreamExt;
use tracing::{error, info};

use crate::error::SlipError;
use crate::model::slip::LookupKey;
use crate::render::{self, RenderedSlip};
use crate::sheet;
use crate::store::MasterStore;

/// Lookup/upload form
pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(include_str!("../../templates/index.html"))
}

/// Generate a salary slip for the submitted employee code and month.
/// If the form carries a spreadsheet, it becomes the new master file first.
pub async fn generate(
    store: web::Data<MasterStore>,
    mut payload: Multipart,
) -> actix_web::Result<impl Responder> {
    let mut emp_code = String::new();
    let mut month = String::new();
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(mut field) = payload.try_next().await? {
        // Every field is drained before the next is polled.
        let mut data = Vec::new();
        while let Some(chunk) = field.try_next().await? {
            data.extend_from_slice(&chunk);
        }

        match field.name() {
            "emp_code" => emp_code = String::from_utf8_lossy(&data).into_owned(),
            "month" => month = String::from_utf8_lossy(&data).into_owned(),
            "file" => {
                let filename = field
                    .content_disposition()
                    .get_filename()
                    .map(str::to_string)
                    .unwrap_or_default();
                // Browsers send a file part with an empty name when no
                // file was chosen.
                if !filename.is_empty() && !data.is_empty() {
                    upload = Some((filename, data));
                }
            }
            _ => {}
        }
    }

    if emp_code.is_empty() || month.is_empty() {
        return Ok(HttpResponse::BadRequest()
            .content_type("text/plain; charset=utf-8")
            .body("Employee Code and Month are required."));
    }

    if let Some((filename, data)) = upload {
        let ext = match supported_extension(&filename) {
            Ok(ext) => ext,
            Err(e) => return Ok(error_response(&e)),
        };
        if let Err(e) = store.replace(&ext, &data) {
            error!(error = %e, filename = %filename, "failed to save uploaded master file");
            return Err(actix_web::error::ErrorInternalServerError(
                "Internal Server Error",
            ));
        }
    }

    let master = store.active_path();
    let out_dir = store.upload_dir().to_path_buf();
    let key = LookupKey::new(emp_code.clone(), month.clone());

    // The pipeline is synchronous file work; keep it off the executor.
    let result = web::block(move || sheet::generate_slip(&master, &key, &out_dir))
        .await
        .map_err(|e| {
            error!(error = %e, "slip generation task failed");
            actix_web::error::ErrorInternalServerError("Internal Server Error")
        })?;

    match result {
        Ok(rendered) => {
            info!(emp_code = %emp_code, month = %month, path = %rendered.path.display(), "salary slip generated");
            Ok(attachment(rendered))
        }
        Err(e) => {
            error!(error = %e, emp_code = %emp_code, month = %month, "slip generation failed");
            Ok(error_response(&e))
        }
    }
}

/// Re-download a previously generated slip from its deterministic path.
pub async fn download(
    store: web::Data<MasterStore>,
    path: web::Path<(String, String)>,
) -> actix_web::Result<impl Responder> {
    let (emp_code, month) = path.into_inner();
    let filename = render::output_filename(&emp_code, &month);
    let slip_path = store.upload_dir().join(&filename);

    match fs::read_to_string(&slip_path) {
        Ok(html) => Ok(attachment(RenderedSlip {
            filename,
            path: slip_path,
            html,
        })),
        Err(_) => Ok(HttpResponse::NotFound()
            .content_type("text/plain; charset=utf-8")
            .body(format!(
                "No slip has been generated for Employee Code {emp_code} and Month {month}."
            ))),
    }
}

fn supported_extension(filename: &str) -> Result<String, SlipError> {
    let ext = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "csv" | "xls" | "xlsx" => Ok(ext),
        other => Err(SlipError::UnsupportedFormat(other.to_string())),
    }
}

fn attachment(rendered: RenderedSlip) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(rendered.filename)],
        })
        .body(rendered.html)
}

fn error_response(err: &SlipError) -> HttpResponse {
    HttpResponse::build(err.status_code())
        .content_type("text/plain; charset=utf-8")
        .body(err.to_string())
}
