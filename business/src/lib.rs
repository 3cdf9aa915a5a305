pub mod application {
    #[cfg(test)]
    pub(crate) mod test_support;

    pub mod authorization {
        pub mod group_permission;
        pub mod guard;
    }
    pub mod cart {
        pub(crate) mod access;
        pub mod create;
        pub mod delete;
        pub mod get_by_id;
        pub mod get_paginated;
        pub mod get_user_cart;
        pub(crate) mod option_link;
        pub mod update;
    }
    pub mod category {
        pub mod get_all;
    }
    pub mod product {
        pub(crate) mod category_link;
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_category;
        pub mod get_by_id;
        pub mod get_option_values;
        pub mod update;
    }
    pub mod wishlist {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        pub mod get_products_by_user;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod field_update;
        pub mod pagination;
        pub mod value_objects;
    }
    pub mod authorization {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
    }
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod validator;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_by_id;
            pub mod get_paginated;
            pub mod get_user_cart;
            pub mod update;
        }
    }
    pub mod category {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get_all;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod option;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_category;
            pub mod get_by_id;
            pub mod get_option_values;
            pub mod update;
        }
    }
    pub mod wishlist {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod get_products_by_user;
        }
    }
}
