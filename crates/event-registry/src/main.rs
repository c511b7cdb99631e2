//! # Event Registry Demo
//!
//! Wires the [`RegistrySystem`], walks through a registration flow and shuts down:
//!
//! 1. Create a user and an event
//! 2. Register the user, then try again (rejected as a duplicate)
//! 3. Close the event and register a second user (rejected, event closed)
//! 4. Mark attendance and list the detailed registrations
//!
//! ```bash
//! RUST_LOG=info cargo run -p event-registry
//! ```

use chrono::{Duration, Utc};
use event_registry::config::RegistryConfig;
use event_registry::lifecycle::{setup_tracing, RegistrySystem};
use event_registry::model::{EventCreate, UserCreate};
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();
    setup_tracing();

    let config = RegistryConfig::from_env();
    info!(?config, "Starting event registry");
    let system = RegistrySystem::start(config).await?;

    let span = tracing::info_span!("setup");
    let (ann, conf) = async {
        let ann = system
            .user_client
            .create_user(UserCreate::new("Ann", "ann@x.com"))
            .await?;
        let conf = system
            .event_client
            .create_event(EventCreate::new("Conf", "NYC", Utc::now() + Duration::days(30)))
            .await?;
        Ok::<_, Box<dyn std::error::Error>>((ann, conf))
    }
    .instrument(span)
    .await?;
    info!(user_id = %ann.id, event_id = %conf.id, "User and event created");

    let span = tracing::info_span!("registration");
    async {
        let registration = system.registration_client.register(ann.id, conf.id).await?;
        info!(registration_id = %registration.id, attended = registration.attended, "Registered");

        match system.registration_client.register(ann.id, conf.id).await {
            Ok(_) => warn!("Duplicate registration was accepted"),
            Err(e) => info!(error = %e, "Duplicate rejected"),
        }

        system.event_client.close_event(conf.id).await?;
        let bea = system
            .user_client
            .create_user(UserCreate::new("Bea", "bea@x.com"))
            .await?;
        match system.registration_client.register(bea.id, conf.id).await {
            Ok(_) => warn!("Registration for a closed event was accepted"),
            Err(e) => info!(error = %e, "Closed event rejected"),
        }

        system
            .registration_client
            .mark_attendance(registration.id)
            .await?;
        Ok::<_, Box<dyn std::error::Error>>(())
    }
    .instrument(span)
    .await?;

    for details in system.registration_client.list_all_detailed().await? {
        info!(
            user = %details.user_name,
            event = %details.event_title,
            attended = details.registration.attended,
            "Registration"
        );
    }

    system.shutdown().await?;
    info!("Application completed successfully");
    Ok(())
}
