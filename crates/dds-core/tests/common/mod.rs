pub mod fetch_server;
