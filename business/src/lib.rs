pub mod application {
    pub mod grocery {
        pub mod facade;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod grocery {
        pub mod errors;
        pub mod facade;
        pub mod model;
        pub mod nullable;
        pub mod page;
        pub mod pagination;
        pub mod repository;
        pub mod value_objects;
    }
}
