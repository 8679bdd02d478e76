//! Densa core library.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod classify;
mod datasource;
mod densa;
mod distance;
mod error;
mod expand;
mod label;
mod neighbors;
mod point;
mod result;

#[cfg(test)]
mod property;
#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::{DEFAULT_EPS, DEFAULT_MIN_PTS, DensaBuilder, ExecutionStrategy, NeighborStrategy},
    classify::Neighborhoods,
    datasource::DataSource,
    densa::Densa,
    distance::{Radius, squared_distance},
    error::{DataSourceError, DataSourceErrorCode, DensaError, DensaErrorCode, Result},
    expand::expand_clusters,
    label::Label,
    neighbors::{NeighborList, region_query},
    point::{Axis, Point, PointCollection},
    result::{ClusterId, ClusteringResult, NonContiguousClusterIds},
};
