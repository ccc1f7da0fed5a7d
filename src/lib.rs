pub mod shared {
    pub mod infrastructure {
        pub mod clock;
        pub mod id_generator;
    }
}

pub mod modules {
    pub mod books {
        pub mod core {
            pub mod book;
            pub mod filter;
            pub mod validation;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod add_book {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_books {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_book_by_id {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_book_by_id {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_book_by_id {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod envelope;
            }
            pub mod outbound {
                pub mod book_repository;
                pub mod book_repository_in_memory;
            }
        }
    }
}

pub mod shell;
