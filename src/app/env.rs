use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Envy {
    pub app_env: String,
    pub frontend_url: String,
    pub port: Option<u16>,

    pub database_url: String,
    pub database_max_connections: Option<u32>,

    pub seed_on_start: Option<bool>,
    pub seed_customers: Option<u32>,
    pub seed_transactions: Option<u32>,
    pub seed_rng_seed: Option<u64>,
}
