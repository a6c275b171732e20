// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! AWS regions accepted by `provider.region`.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// AWS region.
///
/// Declaration order matters: the first variant is the default applied when
/// a provider omits its region.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter, EnumString,
    AsRefStr,
)]
pub enum Region {
    #[default]
    #[serde(rename = "us-east-1")]
    #[strum(serialize = "us-east-1")]
    UsEast1,
    #[serde(rename = "us-east-2")]
    #[strum(serialize = "us-east-2")]
    UsEast2,
    #[serde(rename = "us-west-1")]
    #[strum(serialize = "us-west-1")]
    UsWest1,
    #[serde(rename = "us-west-2")]
    #[strum(serialize = "us-west-2")]
    UsWest2,

    #[serde(rename = "us-gov-east-1")]
    #[strum(serialize = "us-gov-east-1")]
    UsGovEast1,
    #[serde(rename = "us-gov-west-1")]
    #[strum(serialize = "us-gov-west-1")]
    UsGovWest1,
    #[serde(rename = "us-iso-east-1")]
    #[strum(serialize = "us-iso-east-1")]
    UsIsoEast1,
    #[serde(rename = "us-iso-west-1")]
    #[strum(serialize = "us-iso-west-1")]
    UsIsoWest1,
    #[serde(rename = "us-isob-east-1")]
    #[strum(serialize = "us-isob-east-1")]
    UsIsobEast1,

    #[serde(rename = "eu-central-1")]
    #[strum(serialize = "eu-central-1")]
    EuCentral1,
    #[serde(rename = "eu-central-2")]
    #[strum(serialize = "eu-central-2")]
    EuCentral2,
    #[serde(rename = "eu-north-1")]
    #[strum(serialize = "eu-north-1")]
    EuNorth1,
    #[serde(rename = "eu-south-1")]
    #[strum(serialize = "eu-south-1")]
    EuSouth1,
    #[serde(rename = "eu-south-2")]
    #[strum(serialize = "eu-south-2")]
    EuSouth2,
    #[serde(rename = "eu-west-1")]
    #[strum(serialize = "eu-west-1")]
    EuWest1,
    #[serde(rename = "eu-west-2")]
    #[strum(serialize = "eu-west-2")]
    EuWest2,
    #[serde(rename = "eu-west-3")]
    #[strum(serialize = "eu-west-3")]
    EuWest3,

    #[serde(rename = "cn-north-1")]
    #[strum(serialize = "cn-north-1")]
    CnNorth1,
    #[serde(rename = "cn-northwest-1")]
    #[strum(serialize = "cn-northwest-1")]
    CnNorthwest1,

    #[serde(rename = "af-south-1")]
    #[strum(serialize = "af-south-1")]
    AfSouth1,

    #[serde(rename = "ap-east-1")]
    #[strum(serialize = "ap-east-1")]
    ApEast1,
    #[serde(rename = "ap-northeast-1")]
    #[strum(serialize = "ap-northeast-1")]
    ApNortheast1,
    #[serde(rename = "ap-northeast-2")]
    #[strum(serialize = "ap-northeast-2")]
    ApNortheast2,
    #[serde(rename = "ap-northeast-3")]
    #[strum(serialize = "ap-northeast-3")]
    ApNortheast3,
    #[serde(rename = "ap-south-1")]
    #[strum(serialize = "ap-south-1")]
    ApSouth1,
    #[serde(rename = "ap-south-2")]
    #[strum(serialize = "ap-south-2")]
    ApSouth2,
    #[serde(rename = "ap-southeast-1")]
    #[strum(serialize = "ap-southeast-1")]
    ApSoutheast1,
    #[serde(rename = "ap-southeast-2")]
    #[strum(serialize = "ap-southeast-2")]
    ApSoutheast2,
    #[serde(rename = "ap-southeast-3")]
    #[strum(serialize = "ap-southeast-3")]
    ApSoutheast3,

    #[serde(rename = "ca-central-1")]
    #[strum(serialize = "ca-central-1")]
    CaCentral1,

    #[serde(rename = "me-central-1")]
    #[strum(serialize = "me-central-1")]
    MeCentral1,
    #[serde(rename = "me-south-1")]
    #[strum(serialize = "me-south-1")]
    MeSouth1,

    #[serde(rename = "sa-east-1")]
    #[strum(serialize = "sa-east-1")]
    SaEast1,
}
