pub struct Env {
    pub database_url: String,
    pub database_max_connections: u32,
    pub redis_url: String,
    pub frontend_url: String,
    pub ip: String,
    pub port: u16,
    pub workers: usize,
}

impl Env {
    fn new() -> Self {
        let database_url = std::env::var("DATABASE_URL")
            .or_else(|_| std::env::var("DBURL"))
            .expect("DATABASE_URL must be set in .env file or environment variable");
        let database_max_connections = std::env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "5".to_string())
            .parse::<u32>()
            .expect("DATABASE_MAX_CONNECTIONS must be a valid u32 integer");

        let redis_url = std::env::var("REDIS_URL").unwrap_or_else(|_| {
            let address = std::env::var("REDIS_ADDRESS")
                .expect("REDIS_URL or REDIS_ADDRESS must be set in .env file or environment variable");
            let password = std::env::var("REDIS_PASSWORD").unwrap_or_default();
            redis_url_from_parts(&address, &password)
        });

        let frontend_url =
            std::env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:5173".to_string());
        let ip = std::env::var("IP").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "3001".to_string())
            .parse::<u16>()
            .expect("PORT must be a valid u16 integer");
        let workers = std::env::var("WORKERS")
            .unwrap_or_else(|_| "2".to_string())
            .parse::<usize>()
            .expect("WORKERS must be a valid usize integer");
        Env { database_url, database_max_connections, redis_url, frontend_url, ip, port, workers }
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}

fn redis_url_from_parts(address: &str, password: &str) -> String {
    if password.is_empty() {
        format!("redis://{address}/0")
    } else {
        format!("redis://:{password}@{address}/0")
    }
}
