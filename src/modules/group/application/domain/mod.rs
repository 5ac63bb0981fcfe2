pub mod group_policy;
