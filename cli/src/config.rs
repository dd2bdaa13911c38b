use clap::{Parser, ValueEnum};
use sociograph::UserId;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sociograph", author, version, about)]
pub struct Config {
    /// Path to a dataset file in json format with the shape
    /// `{ "users": [{"id": 0, "name": "..."}], "friendships": [[0, 1]],
    /// "interests": [[0, "label"]] }`.
    ///
    /// Friendships are undirected; list each pair once.
    #[arg(short, long, value_name = "PATH")]
    pub dataset: PathBuf,

    /// Queries to run against the dataset, in order.
    #[arg(short, long, required(true))]
    pub query: Vec<QueryName>,

    /// Target user id for the queries that are relative to a single user
    /// (mutual-friends and common-interests).
    #[arg(short, long)]
    pub user: Option<UserId>,
}

#[derive(ValueEnum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum QueryName {
    /// Friend sets for every user.
    Friends,
    /// Mean friend count per user. Each friendship counts toward both of its
    /// endpoints.
    AverageDegree,
    /// Per-user mutual friends with the --user target.
    MutualFriends,
    /// Per-user shared interest labels with the --user target.
    CommonInterests,
}
