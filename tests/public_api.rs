#![allow(unused_imports)]

use app_mount::{
    bootstrap, AppHandle, Bootstrapper, Component, Document, DocumentRef, ElementView, EnvConfig,
    HostEvent, InstanceId, Invalidator, MemoryDocument, MountError, MountResult, MountTarget,
    NodeId, Scope, Signal, Subscription, View, DEFAULT_TARGET_ID,
};

#[test]
fn public_api_exports_compile() {}
