//! Wire models for the catalog parents (agents, monitors, instances,
//! services, status pages). These resources only carry the reduced
//! create/list/get/delete surface, so each has one inbound payload and one
//! outbound DTO.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::db::entities::{agent, http_monitor, instance, monitored_service, status_page};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentPayload {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub hostname: Option<String>,
    pub ip_address: Option<String>,
    pub agent_version: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentDto {
    pub id: i64,
    pub name: String,
    pub hostname: Option<String>,
    pub ip_address: Option<String>,
    pub agent_version: Option<String>,
    pub status: Option<String>,
}

impl From<agent::Model> for AgentDto {
    fn from(model: agent::Model) -> Self {
        AgentDto {
            id: model.id,
            name: model.name,
            hostname: model.hostname,
            ip_address: model.ip_address,
            agent_version: model.agent_version,
            status: model.status,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpMonitorPayload {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub method: Option<String>,
    #[serde(rename = "type")]
    pub monitor_type: Option<String>,
    pub url: Option<String>,
    pub interval_seconds: Option<i32>,
    pub timeout_seconds: Option<i32>,
    pub retry_count: Option<i32>,
    pub retry_delay_seconds: Option<i32>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpMonitorDto {
    pub id: i64,
    pub name: String,
    pub method: String,
    #[serde(rename = "type")]
    pub monitor_type: String,
    pub url: Option<String>,
    pub interval_seconds: i32,
    pub timeout_seconds: i32,
    pub retry_count: i32,
    pub retry_delay_seconds: i32,
}

impl From<http_monitor::Model> for HttpMonitorDto {
    fn from(model: http_monitor::Model) -> Self {
        HttpMonitorDto {
            id: model.id,
            name: model.name,
            method: model.method,
            monitor_type: model.monitor_type,
            url: model.url,
            interval_seconds: model.interval_seconds,
            timeout_seconds: model.timeout_seconds,
            retry_count: model.retry_count,
            retry_delay_seconds: model.retry_delay_seconds,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstancePayload {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub hostname: Option<String>,
    pub description: Option<String>,
    pub instance_type: Option<String>,
    pub monitoring_type: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceDto {
    pub id: i64,
    pub name: String,
    pub hostname: String,
    pub description: Option<String>,
    pub instance_type: String,
    pub monitoring_type: String,
}

impl From<instance::Model> for InstanceDto {
    fn from(model: instance::Model) -> Self {
        InstanceDto {
            id: model.id,
            name: model.name,
            hostname: model.hostname,
            description: model.description,
            instance_type: model.instance_type,
            monitoring_type: model.monitoring_type,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitoredServicePayload {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub service_type: Option<String>,
    pub environment: Option<String>,
    pub interval_seconds: Option<i32>,
    pub timeout_ms: Option<i32>,
    pub retry_count: Option<i32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitoredServiceDto {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub service_type: String,
    pub environment: String,
    pub interval_seconds: i32,
    pub timeout_ms: i32,
    pub retry_count: i32,
    pub is_active: Option<bool>,
}

impl From<monitored_service::Model> for MonitoredServiceDto {
    fn from(model: monitored_service::Model) -> Self {
        MonitoredServiceDto {
            id: model.id,
            name: model.name,
            description: model.description,
            service_type: model.service_type,
            environment: model.environment,
            interval_seconds: model.interval_seconds,
            timeout_ms: model.timeout_ms,
            retry_count: model.retry_count,
            is_active: model.is_active,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusPagePayload {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub is_public: Option<bool>,
    pub is_active: Option<bool>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusPageDto {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub is_public: bool,
    pub is_active: Option<bool>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<status_page::Model> for StatusPageDto {
    fn from(model: status_page::Model) -> Self {
        StatusPageDto {
            id: model.id,
            name: model.name,
            slug: model.slug,
            description: model.description,
            is_public: model.is_public,
            is_active: model.is_active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
