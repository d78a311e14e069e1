use crate::domain::{Member, MemberId};
use crate::ports::directory::{Directory as DirectoryTrait, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// Directoryのインメモリ実装
pub struct Directory {
    members: Mutex<HashMap<MemberId, Member>>,
}

impl Directory {
    pub fn new() -> Self {
        Self {
            members: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for Directory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DirectoryTrait for Directory {
    async fn add(&self, member: Member) -> Result<()> {
        self.members
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(member.id.clone(), member);
        Ok(())
    }

    async fn get(&self, member_id: &MemberId) -> Result<Option<Member>> {
        Ok(self
            .members
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(member_id)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_add_then_get_member() {
        let directory = Directory::new();
        let member = Member::new(MemberId::new("M1"), "Alice");

        directory.add(member.clone()).await.unwrap();

        assert_eq!(
            directory.get(&MemberId::new("M1")).await.unwrap(),
            Some(member)
        );
    }

    #[tokio::test]
    async fn test_add_same_id_overwrites() {
        let directory = Directory::new();
        directory
            .add(Member::new(MemberId::new("M1"), "Alice"))
            .await
            .unwrap();

        directory
            .add(Member::new(MemberId::new("M1"), "Alicia"))
            .await
            .unwrap();

        let member = directory.get(&MemberId::new("M1")).await.unwrap().unwrap();
        assert_eq!(member.name, "Alicia");
    }

    #[tokio::test]
    async fn test_get_unknown_member_returns_none() {
        let directory = Directory::new();
        assert!(directory.get(&MemberId::new("M9")).await.unwrap().is_none());
    }
}
