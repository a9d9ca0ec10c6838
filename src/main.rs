use life_connect::configuration::get_configuration;
use life_connect::startup::Application;
use life_connect::telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let subscriber = telemetry::get_subscriber(
        "life_connect".to_string(),
        "info".to_string(),
        std::io::stdout,
    );
    telemetry::init_subscriber(subscriber);

    let configuration = get_configuration().expect("Failed to read configuration.");

    let application = Application::build(configuration)
        .await
        .expect("Failed to build the application");
    application.run_until_stop().await
}
