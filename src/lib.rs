pub mod modules {
    pub mod books {
        pub mod core {
            pub mod book;
            pub mod errors;
            pub mod seed;
        }
        pub mod use_cases {
            pub mod list_books {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod create_book {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_book {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_book {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_book {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod http_errors;
            }
            pub mod outbound {
                pub mod book_repository;
                pub mod book_repository_in_memory;
            }
        }
    }
    pub mod parameters {
        pub mod inbound {
            pub mod http;
        }
    }
}

pub mod shell;
