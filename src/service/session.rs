use crate::models::{FilterCriteria, SearchOutcome, Suggestions};

/// 查询凭据：记录发起时的条件快照
#[derive(Debug, Clone)]
pub struct SearchTicket {
    generation: u64,
    criteria: FilterCriteria,
}

impl SearchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }
}

/// 报表会话状态：筛选条件、候选列表、最新结果
///
/// 查询可能重叠，只有最后发起的查询可以写入结果。
#[derive(Debug, Default)]
pub struct ReportSession {
    criteria: FilterCriteria,
    suggestions: Option<Suggestions>,
    outcome: SearchOutcome,
    generation: u64,
}

impl ReportSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn criteria_mut(&mut self) -> &mut FilterCriteria {
        &mut self.criteria
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
    }

    pub fn suggestions(&self) -> Option<&Suggestions> {
        self.suggestions.as_ref()
    }

    /// 候选每个会话只加载一次，之后的写入被忽略
    pub fn install_suggestions(&mut self, suggestions: Suggestions) -> bool {
        if self.suggestions.is_some() {
            return false;
        }
        self.suggestions = Some(suggestions);
        true
    }

    pub fn outcome(&self) -> &SearchOutcome {
        &self.outcome
    }

    /// 发起查询；之前未完成的查询作废
    pub fn begin_search(&mut self) -> SearchTicket {
        self.generation += 1;
        SearchTicket {
            generation: self.generation,
            criteria: self.criteria.clone(),
        }
    }

    /// 写入结果；凭据已过期时丢弃并返回 false
    pub fn finish_search(&mut self, ticket: SearchTicket, outcome: SearchOutcome) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                "Discarding stale search result (generation {} < {})",
                ticket.generation,
                self.generation
            );
            return false;
        }
        self.outcome = outcome;
        true
    }
}
