pub mod legend_server;
