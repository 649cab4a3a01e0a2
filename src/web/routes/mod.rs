pub mod agent_monitor_routes;
pub mod catalog_routes;
pub mod service_instance_routes;
pub mod status_page_item_routes;
