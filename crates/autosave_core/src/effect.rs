#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Arm (or re-arm) the repeating timer with the given period.
    StartTimer { period_ms: u64 },
    /// Cancel the repeating timer.
    StopTimer,
    /// Ask the host to save all open documents. Fire-and-forget; the shell
    /// reports acceptance back as `Msg::SaveAllDispatched`.
    DispatchSaveAll,
    ShowDebugPanel,
    HideDebugPanel,
    ShowAboutPanel,
    HideAboutPanel,
    /// Open an external link from the About panel.
    OpenLink { target: LinkTarget },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    Repository,
    AuthorProfile,
}
