//! Resource preload gate
//!
//! The page is blank until its fonts and header image have loaded. Each
//! resource is tracked separately; the gate opens once all of them are ready.
//! There is no timeout or retry, so a failed resource keeps the gate shut.

/// Resources that must be loaded before the page is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceId {
    RegularFont,
    MediumFont,
    HeaderImage,
}

impl ResourceId {
    pub const ALL: [ResourceId; 3] = [
        ResourceId::RegularFont,
        ResourceId::MediumFont,
        ResourceId::HeaderImage,
    ];

    fn index(self) -> usize {
        match self {
            ResourceId::RegularFont => 0,
            ResourceId::MediumFont => 1,
            ResourceId::HeaderImage => 2,
        }
    }
}

impl std::fmt::Display for ResourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceId::RegularFont => write!(f, "regular font"),
            ResourceId::MediumFont => write!(f, "medium font"),
            ResourceId::HeaderImage => write!(f, "header image"),
        }
    }
}

/// Load status of a single resource
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResourceStatus {
    #[default]
    Pending,
    Ready,
    Failed(String),
}

#[derive(Debug, Clone, Default)]
pub struct ResourceGate {
    statuses: [ResourceStatus; 3],
}

impl ResourceGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self, id: ResourceId) -> &ResourceStatus {
        &self.statuses[id.index()]
    }

    /// Mark a resource as loaded
    ///
    /// Returns true only for the call that opens the gate.
    pub fn mark_ready(&mut self, id: ResourceId) -> bool {
        let was_open = self.is_open();
        self.statuses[id.index()] = ResourceStatus::Ready;
        !was_open && self.is_open()
    }

    /// Record a load failure. Has no effect on an already loaded resource.
    pub fn mark_failed(&mut self, id: ResourceId, reason: impl Into<String>) {
        let slot = &mut self.statuses[id.index()];
        if *slot != ResourceStatus::Ready {
            *slot = ResourceStatus::Failed(reason.into());
        }
    }

    /// All resources are ready
    pub fn is_open(&self) -> bool {
        self.statuses.iter().all(|s| *s == ResourceStatus::Ready)
    }

    /// Resources that have not resolved yet
    pub fn pending(&self) -> Vec<ResourceId> {
        ResourceId::ALL
            .into_iter()
            .filter(|id| *self.status(*id) == ResourceStatus::Pending)
            .collect()
    }

    /// Resources that failed, with their reasons
    pub fn failures(&self) -> Vec<(ResourceId, &str)> {
        ResourceId::ALL
            .into_iter()
            .filter_map(|id| match self.status(id) {
                ResourceStatus::Failed(reason) => Some((id, reason.as_str())),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_closed_until_all_ready() {
        let mut gate = ResourceGate::new();
        assert!(!gate.is_open());
        assert_eq!(gate.pending().len(), 3);

        assert!(!gate.mark_ready(ResourceId::MediumFont));
        assert!(!gate.is_open());
        assert!(!gate.mark_ready(ResourceId::HeaderImage));
        assert!(!gate.is_open());
        assert_eq!(gate.pending(), vec![ResourceId::RegularFont]);

        assert!(gate.mark_ready(ResourceId::RegularFont));
        assert!(gate.is_open());
        assert!(gate.pending().is_empty());
    }

    #[test]
    fn test_gate_opens_exactly_once() {
        let mut gate = ResourceGate::new();
        let opened: usize = ResourceId::ALL
            .into_iter()
            .chain(ResourceId::ALL)
            .map(|id| gate.mark_ready(id) as usize)
            .sum();
        assert_eq!(opened, 1);
        assert!(gate.is_open());
    }

    #[test]
    fn test_failure_keeps_gate_closed() {
        let mut gate = ResourceGate::new();
        gate.mark_ready(ResourceId::RegularFont);
        gate.mark_ready(ResourceId::MediumFont);
        gate.mark_failed(ResourceId::HeaderImage, "not found");

        assert!(!gate.is_open());
        assert!(gate.pending().is_empty());
        assert_eq!(gate.failures(), vec![(ResourceId::HeaderImage, "not found")]);
    }

    #[test]
    fn test_failure_does_not_override_ready() {
        let mut gate = ResourceGate::new();
        gate.mark_ready(ResourceId::RegularFont);
        gate.mark_failed(ResourceId::RegularFont, "late error");
        assert_eq!(*gate.status(ResourceId::RegularFont), ResourceStatus::Ready);
    }
}
