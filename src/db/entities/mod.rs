//! SeaORM entities, one module per table.

pub mod agent;
pub mod agent_monitor;
pub mod http_monitor;
pub mod instance;
pub mod monitored_service;
pub mod service_instance;
pub mod status_page;
pub mod status_page_item;

// Prelude module for easy importing of all entities and their related types
pub mod prelude {
    pub use super::agent::Entity as Agent;
    pub use super::agent::Model as AgentModel;

    pub use super::agent_monitor::ActiveModel as AgentMonitorActiveModel;
    pub use super::agent_monitor::Entity as AgentMonitor;
    pub use super::agent_monitor::Model as AgentMonitorModel;

    pub use super::http_monitor::Entity as HttpMonitor;
    pub use super::http_monitor::Model as HttpMonitorModel;

    pub use super::instance::Entity as Instance;
    pub use super::instance::Model as InstanceModel;

    pub use super::monitored_service::Entity as MonitoredService;
    pub use super::monitored_service::Model as MonitoredServiceModel;

    pub use super::service_instance::ActiveModel as ServiceInstanceActiveModel;
    pub use super::service_instance::Entity as ServiceInstance;
    pub use super::service_instance::Model as ServiceInstanceModel;

    pub use super::status_page::Entity as StatusPage;
    pub use super::status_page::Model as StatusPageModel;

    pub use super::status_page_item::ActiveModel as StatusPageItemActiveModel;
    pub use super::status_page_item::Entity as StatusPageItem;
    pub use super::status_page_item::Model as StatusPageItemModel;
}
