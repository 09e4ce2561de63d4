pub mod auth {
    pub mod model;
    pub mod repository;
    pub mod repository_redis;
    #[cfg(test)]
    pub mod repository_memory;
    pub mod service;
}

pub mod friend {
    pub mod schema;
    pub mod model;
    pub mod repository;
    pub mod repository_pg;
    #[cfg(test)]
    pub mod repository_memory;
    pub mod handle;
    pub mod service;
    pub mod route;
}
