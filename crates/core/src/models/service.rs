use serde::{Deserialize, Serialize};

/// A service the provider offers. The catalogue is static configuration;
/// bookings reference services by id only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub label: String,
    pub minutes: u32,
}

/// The default service catalogue.
pub fn default_services() -> Vec<Service> {
    vec![
        Service {
            id: "corte".to_string(),
            label: "Haircut".to_string(),
            minutes: 30,
        },
        Service {
            id: "barba".to_string(),
            label: "Beard trim".to_string(),
            minutes: 20,
        },
        Service {
            id: "combo".to_string(),
            label: "Haircut + beard".to_string(),
            minutes: 50,
        },
    ]
}
