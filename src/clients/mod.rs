pub mod toggl_client;
