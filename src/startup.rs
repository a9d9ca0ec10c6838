use crate::configuration::Settings;
use crate::routes;
use crate::sms_client::SmsClient;
use actix_cors::Cors;
use actix_web::{self, App, HttpServer, dev::Server, web};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Application, std::io::Error> {
        let sms_client = configuration.sms_client.client();

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();
        let server = run(listener, sms_client)?;

        Ok(Application { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stop(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub fn run(listener: TcpListener, sms_client: SmsClient) -> Result<Server, std::io::Error> {
    let sms_client = web::Data::new(sms_client);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .service(routes::health_check)
            .service(routes::send_blood_request)
            .app_data(sms_client.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
