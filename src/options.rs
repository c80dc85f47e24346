//! Typed view of the Configuration Vector.
//! Each configuration axis becomes an enum so that every template decision made in
//! Rust is an exhaustive match, and parameters that are irrelevant for the chosen
//! combination become `None`.

use crate::error::{Error, Result};
use crate::vector::ConfigVector;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvironmentSetup {
    Full,
    Minimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkspaceSetup {
    SingleWorkspace,
    MultiWorkspace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComputeType {
    Classic,
    Serverless,
    Both,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CloudProvider {
    #[default]
    Azure,
    Aws,
    Gcp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CicdPlatform {
    AzureDevops,
    GithubActions,
    Gitlab,
}

/// Deployment targets, in the order they appear in `databricks.yml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    User,
    Dev,
    Stage,
    Prod,
}

const ARM_AUTH_VARIABLES: &[&str] = &["ARM_TENANT_ID", "ARM_CLIENT_ID", "ARM_CLIENT_SECRET"];
const OAUTH_AUTH_VARIABLES: &[&str] =
    &["DATABRICKS_HOST", "DATABRICKS_CLIENT_ID", "DATABRICKS_CLIENT_SECRET"];

impl EnvironmentSetup {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "full" => Some(Self::Full),
            "minimal" => Some(Self::Minimal),
            _ => None,
        }
    }
}

impl WorkspaceSetup {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "single_workspace" => Some(Self::SingleWorkspace),
            "multi_workspace" => Some(Self::MultiWorkspace),
            _ => None,
        }
    }
}

impl ComputeType {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "classic" => Some(Self::Classic),
            "serverless" => Some(Self::Serverless),
            "both" => Some(Self::Both),
            _ => None,
        }
    }

    pub fn uses_classic(&self) -> bool {
        matches!(self, Self::Classic | Self::Both)
    }
}

impl CloudProvider {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "azure" => Some(Self::Azure),
            "aws" => Some(Self::Aws),
            "gcp" => Some(Self::Gcp),
            _ => None,
        }
    }

    /// Default worker node type for classic clusters on this cloud.
    pub fn node_type_id(&self) -> &'static str {
        match self {
            Self::Azure => "Standard_DS3_v2",
            Self::Aws => "i3.xlarge",
            Self::Gcp => "n1-standard-4",
        }
    }
}

impl CicdPlatform {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "azure_devops" => Some(Self::AzureDevops),
            "github_actions" => Some(Self::GithubActions),
            "gitlab" => Some(Self::Gitlab),
            _ => None,
        }
    }

    /// Secret variables the pipeline expects for authenticating the Databricks CLI.
    /// Azure DevOps on Azure authenticates through an ARM service connection; every
    /// other combination uses OAuth machine-to-machine credentials.
    pub fn auth_variables(&self, cloud: CloudProvider) -> &'static [&'static str] {
        match (self, cloud) {
            (Self::AzureDevops, CloudProvider::Azure) => ARM_AUTH_VARIABLES,
            (Self::AzureDevops, _) | (Self::GithubActions, _) | (Self::Gitlab, _) => {
                OAUTH_AUTH_VARIABLES
            }
        }
    }
}

impl Target {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Dev => "dev",
            Self::Stage => "stage",
            Self::Prod => "prod",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServicePrincipals {
    pub dev: Option<String>,
    pub stage: String,
    pub prod: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cicd {
    pub platform: CicdPlatform,
    pub default_branch: String,
    pub release_branch: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectOptions {
    pub project_name: String,
    pub uc_catalog_suffix: String,
    pub environment_setup: EnvironmentSetup,
    pub include_dev_environment: bool,
    pub workspace_setup: WorkspaceSetup,
    pub compute_type: ComputeType,
    pub cloud_provider: Option<CloudProvider>,
    pub include_permissions: bool,
    pub service_principals: Option<ServicePrincipals>,
    pub cicd: Option<Cicd>,
}

impl ProjectOptions {
    /// Deployment targets generated for these options.
    pub fn targets(&self) -> Vec<Target> {
        let mut targets = vec![Target::User];
        if self.include_dev_environment {
            targets.push(Target::Dev);
        }
        targets.push(Target::Stage);
        if self.environment_setup == EnvironmentSetup::Full {
            targets.push(Target::Prod);
        }
        targets
    }

    /// Cloud used for lookups; a skipped cloud falls back to the schema default.
    pub fn effective_cloud(&self) -> CloudProvider {
        self.cloud_provider.unwrap_or_default()
    }

    /// Node type for classic clusters, `None` when only serverless compute is used.
    pub fn node_type_id(&self) -> Option<&'static str> {
        self.compute_type.uses_classic().then(|| self.effective_cloud().node_type_id())
    }

    /// CI secret variables, empty when CI/CD is disabled.
    pub fn ci_auth_variables(&self) -> &'static [&'static str] {
        match &self.cicd {
            Some(cicd) => cicd.platform.auth_variables(self.effective_cloud()),
            None => &[],
        }
    }
}

fn parse_axis<T>(vector: &ConfigVector, key: &str, parse: fn(&str) -> Option<T>) -> Result<T> {
    let value = vector.get(key)?;
    parse(value).ok_or_else(|| {
        Error::SchemaError(format!("pattern of '{key}' admits '{value}' but no option matches it"))
    })
}

fn parse_flag(vector: &ConfigVector, key: &str) -> Result<bool> {
    parse_axis(vector, key, |value| match value {
        "yes" => Some(true),
        "no" => Some(false),
        _ => None,
    })
}

impl TryFrom<&ConfigVector> for ProjectOptions {
    type Error = Error;

    fn try_from(vector: &ConfigVector) -> Result<Self> {
        let cloud_provider = if vector.is_skipped("cloud_provider") {
            None
        } else {
            Some(parse_axis(vector, "cloud_provider", CloudProvider::parse)?)
        };

        let service_principals = if parse_flag(vector, "configure_sp_now")? {
            Some(ServicePrincipals {
                dev: vector.get_active("dev_service_principal")?.map(str::to_string),
                stage: vector.get("stage_service_principal")?.to_string(),
                prod: vector.get_active("prod_service_principal")?.map(str::to_string),
            })
        } else {
            None
        };

        let cicd = if parse_flag(vector, "include_cicd")? {
            Some(Cicd {
                platform: parse_axis(vector, "cicd_platform", CicdPlatform::parse)?,
                default_branch: vector.get("default_branch")?.to_string(),
                release_branch: vector.get_active("release_branch")?.map(str::to_string),
            })
        } else {
            None
        };

        Ok(Self {
            project_name: vector.get("project_name")?.to_string(),
            uc_catalog_suffix: vector.get("uc_catalog_suffix")?.to_string(),
            environment_setup: parse_axis(vector, "environment_setup", EnvironmentSetup::parse)?,
            include_dev_environment: parse_flag(vector, "include_dev_environment")?,
            workspace_setup: parse_axis(vector, "workspace_setup", WorkspaceSetup::parse)?,
            compute_type: parse_axis(vector, "compute_type", ComputeType::parse)?,
            cloud_provider,
            include_permissions: parse_flag(vector, "include_permissions")?,
            service_principals,
            cicd,
        })
    }
}
