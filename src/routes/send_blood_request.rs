use crate::domain::Donor;
use crate::sms_client::SmsClient;
use actix_web::{HttpResponse, post, web};
use serde_json::json;
use tracing;

pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields";

pub enum SendResult {
    Success(String),
    Failure(String),
}

#[tracing::instrument(name = "Send a blood request", skip(body, sms_client))]
#[post("/send_blood_request")]
pub async fn send_blood_request(
    body: web::Bytes,
    sms_client: web::Data<SmsClient>,
) -> HttpResponse {
    // An unparseable or non JSON body carries no fields at all, so it gets
    // the same answer as a payload with fields missing.
    let payload: serde_json::Value = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(_) => return missing_fields_response(),
    };
    let donor = match Donor::parse(&payload) {
        Ok(donor) => donor,
        Err(_) => return missing_fields_response(),
    };
    match dispatch_blood_request(sms_client.get_ref(), &donor).await {
        SendResult::Success(message_sid) => {
            tracing::info!("The blood request SMS has been sent");
            HttpResponse::Ok().json(json!({
                "status": "success",
                "message_sid": message_sid,
            }))
        }
        SendResult::Failure(detail) => HttpResponse::InternalServerError().json(json!({
            "status": "error",
            "message": detail,
        })),
    }
}

fn missing_fields_response() -> HttpResponse {
    HttpResponse::BadRequest().json(json!({
        "status": "error",
        "message": MISSING_FIELDS_MESSAGE,
    }))
}

pub fn blood_request_body(donor: &Donor) -> String {
    format!(
        "🚨 Urgent Blood Request! 🚨\nDear {}, we need {} blood at {}. Please respond ASAP!",
        donor.name, donor.blood_group, donor.location
    )
}

#[tracing::instrument(
    name = "Dispatch the blood request SMS",
    skip(sms_client, donor),
    fields(donor_name = %donor.name)
)]
pub async fn dispatch_blood_request(sms_client: &SmsClient, donor: &Donor) -> SendResult {
    match sms_client
        .send_sms(&donor.phone, &blood_request_body(donor))
        .await
    {
        Ok(message_sid) => SendResult::Success(message_sid),
        Err(e) => {
            tracing::error!("Could not send the blood request SMS because : {:?}", e);
            SendResult::Failure(format!("Error sending SMS: {}", e))
        }
    }
}
