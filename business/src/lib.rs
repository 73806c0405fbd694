pub mod application {
    pub mod price {
        pub mod fetch_price;
        pub mod lookup;
    }
    pub mod scan {
        pub mod session;
    }
}

pub mod domain {
    pub mod logger;
    pub mod price {
        pub mod errors;
        pub mod lookup;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod fetch_price;
        }
    }
    pub mod scan {
        pub mod errors;
        pub mod services;
        pub mod session;
        pub mod value_objects;
    }
}
