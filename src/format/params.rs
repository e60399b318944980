//! The `m=<memory>,t=<iterations>,p=<parallelism>` segment of a hash.

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostParams {
    pub memory_cost: u32,
    pub iterations: u32,
    pub parallelism: u8,
}

impl CostParams {
    pub fn encode(&self) -> String {
        format!(
            "m={},t={},p={}",
            self.memory_cost, self.iterations, self.parallelism
        )
    }

    /// Parses the segment. Fields must appear in `m,t,p` order.
    pub fn decode(segment: &str) -> Result<Self> {
        let mut fields = segment.split(',');
        let memory_cost = field(fields.next(), "m=")?.parse::<u32>()?;
        let iterations = field(fields.next(), "t=")?.parse::<u32>()?;
        let parallelism = field(fields.next(), "p=")?.parse::<u8>()?;
        if fields.next().is_some() {
            return Err(Error::InvalidHash);
        }

        Ok(Self {
            memory_cost,
            iterations,
            parallelism,
        })
    }
}

fn field<'a>(field: Option<&'a str>, prefix: &str) -> Result<&'a str> {
    field
        .and_then(|f| f.strip_prefix(prefix))
        .ok_or(Error::InvalidHash)
}
