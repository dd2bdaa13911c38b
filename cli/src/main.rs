use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Display;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueEnum};
use itertools::Itertools;

use sociograph::{Dataset, Network, UserId};

use crate::config::{Config, QueryName};

mod config;

fn main() -> Result<()> {
    env_logger::init();
    let config = Config::parse();
    let dataset = load_dataset(&config.dataset)?;
    let network = Network::build(dataset)
        .map_err(|errs| anyhow!("invalid dataset:\n{}", errs.iter().join("\n")))?;
    for query in &config.query {
        print!("{}", run_query(&network, *query, config.user)?);
    }
    Ok(())
}

fn load_dataset(path: &Path) -> Result<Dataset> {
    let file =
        File::open(path).with_context(|| format!("read dataset '{}'", path.display()))?;
    let reader = BufReader::new(file);
    Ok(serde_json::from_reader(reader)?)
}

fn run_query(network: &Network, query: QueryName, user: Option<UserId>) -> Result<String> {
    match query {
        QueryName::Friends => Ok(per_user_report(
            "friends",
            network,
            &network.friend_index(),
        )),
        QueryName::AverageDegree => {
            Ok(format!("average degree: {}\n", network.average_degree()))
        }
        QueryName::MutualFriends => {
            let user = target_user(query, user)?;
            let title = format!("mutual friends with user {user}");
            Ok(per_user_report(
                &title,
                network,
                &network.mutual_friends(user)?,
            ))
        }
        QueryName::CommonInterests => {
            let user = target_user(query, user)?;
            let title = format!("common interests with user {user}");
            Ok(per_user_report(
                &title,
                network,
                &network.common_interests(user)?,
            ))
        }
    }
}

fn target_user(query: QueryName, user: Option<UserId>) -> Result<UserId> {
    user.ok_or_else(|| {
        anyhow!(
            "query '{}' requires --user",
            query.to_possible_value().unwrap().get_name()
        )
    })
}

fn per_user_report<T: Display + Ord>(
    title: &str,
    network: &Network,
    per_user: &BTreeMap<UserId, BTreeSet<T>>,
) -> String {
    let mut out = format!("{title}:\n");
    for (id, set) in per_user {
        let name = network
            .user(*id)
            .map(|user| user.name.as_str())
            .unwrap_or("?");
        out.push_str(&format!("  {} {}: {}\n", id, name, set.iter().join(", ")));
    }
    out
}
