pub mod modules {
    pub mod course_registrations {
        pub mod core {
            pub mod evolve;
            pub mod record;
            pub mod state;
            pub mod status;
        }
        pub mod use_cases {
            pub mod list_current_valid_participants {
                pub mod handler;
                pub mod resolve;
                pub mod source_port;
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod source_in_memory;
                pub mod source_json_file;
            }
        }
    }
}

pub mod shell;
