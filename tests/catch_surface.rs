use anyhow::Context;
use rex_error::{
    chain_has_tag, find_rex_error, raise, AddressInUse, AmbiguousArgumentError, ArgumentError,
    ConnectionRefused, FrameworkError, HostCommunicationError, Kind, RexError, SocketError,
    StreamClosedError, TimeoutError, UnsupportedProtocol, FRAMEWORK_TAG, SOCKET_TAG,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn connect(host: &str, port: u16, listening: bool) -> rex_error::Result<()> {
    if !listening {
        return raise(ConnectionRefused::with_context((host, port)));
    }
    Ok(())
}

fn open_listener(port: u16) -> rex_error::Result<()> {
    raise(AddressInUse::with_context(("0.0.0.0", port)))
}

/// Handler that only cares about the socket group, not the concrete kind.
fn describe_socket_failure<E: SocketError>(err: &E) -> String {
    format!("socket failure {}: {}", err.kind_id(), err)
}

fn describe_framework_failure<E: FrameworkError>(err: &E) -> String {
    format!("{} ({})", err, err.category())
}

#[test]
fn test_catch_concrete_variant() {
    init_logging();

    let err = connect("10.0.0.1", 4444, false).unwrap_err();
    match &err {
        RexError::ConnectionRefused(refused) => {
            assert_eq!(refused.host(), Some("10.0.0.1"));
            assert_eq!(refused.port(), Some(4444));
        }
        other => panic!("unexpected kind: {other:?}"),
    }
    assert!(connect("10.0.0.1", 4444, true).is_ok());
}

#[test]
fn test_catch_by_tag() {
    init_logging();

    let errors = [
        connect("10.0.0.1", 4444, false).unwrap_err(),
        open_listener(8080).unwrap_err(),
        RexError::from(StreamClosedError::new("fd7")),
    ];

    let socket_msgs = errors
        .iter()
        .filter(|err| err.is_socket_error())
        .map(|err| err.to_string())
        .collect::<Vec<_>>();
    assert_eq!(
        socket_msgs,
        [
            "The connection was refused by the remote host (10.0.0.1:4444).",
            "The address is already in use (0.0.0.0:8080).",
        ]
    );
    assert!(errors.iter().all(|err| err.has_tag(&FRAMEWORK_TAG)));
}

#[test]
fn test_generic_handlers() {
    let msg = describe_socket_failure(&UnsupportedProtocol::with_protocol("foo"));
    assert_eq!(
        msg,
        "socket failure UNSUPPORTED_PROTOCOL: The protocol foo is not supported."
    );

    let msg = describe_framework_failure(&TimeoutError);
    assert_eq!(msg, "Operation timed out. (INTERRUPTED)");

    let msg = describe_framework_failure(&AmbiguousArgumentError::with_name("foo"));
    assert_eq!(msg, "The name foo is ambiguous. (RUNTIME)");
}

#[test]
fn test_catch_through_anyhow() {
    init_logging();

    let res: anyhow::Result<()> = open_listener(9000).context("starting control server");
    let err = res.unwrap_err();
    assert_eq!(err.to_string(), "starting control server");

    let root = err.root_cause();
    assert_eq!(root.to_string(), "The address is already in use (0.0.0.0:9000).");

    assert!(chain_has_tag(&*err, &SOCKET_TAG));
    let found = find_rex_error(&*err).unwrap();
    assert_eq!(
        found.host_context().and_then(|ctx| ctx.port()),
        Some(9000)
    );
}

#[test]
fn test_concrete_kind_behind_anyhow() {
    let err = anyhow::Error::new(ArgumentError).context("parsing options");
    let found = find_rex_error(&*err).unwrap();
    assert_eq!(found, RexError::Argument(ArgumentError));
    assert!(!chain_has_tag(&*err, &SOCKET_TAG));
}
