use rex_error::{
    raise, AddressInUse, AmbiguousArgumentError, ArgumentError, ArgumentParseError,
    ConnectionRefused, ConnectionTimeout, NotImplementedError, RexError, RuntimeError,
    StreamClosedError, TimeoutError, UnsupportedProtocol,
};

fn bind(port: u16) -> rex_error::Result<()> {
    raise(AddressInUse::with_context(("0.0.0.0", port)))
}

fn main() {
    env_logger::init();

    let errors: Vec<RexError> = vec![
        TimeoutError.into(),
        NotImplementedError.into(),
        RuntimeError::new().into(),
        RuntimeError::with_msg("session table is full").into(),
        ArgumentError.into(),
        ArgumentParseError.into(),
        AmbiguousArgumentError::with_name("exploit/multi/handler").into(),
        StreamClosedError::new("fd7").into(),
        ConnectionRefused::with_context(("10.0.0.1", 4444)).into(),
        ConnectionTimeout::new().into(),
        UnsupportedProtocol::with_protocol("gopher").into(),
    ];

    for err in &errors {
        let tags = err
            .tags()
            .iter()
            .map(|tag| tag.0)
            .collect::<Vec<_>>()
            .join(",");
        println!("{:<26} {:<17} [{tags}]", err.kind_id(), err.category());
        println!("    msg={err}");
        println!("    dbg={err:?}");
        println!();
    }

    if let Err(err) = bind(4444) {
        println!("bind failed, socket error: {}", err.is_socket_error());
        println!("    msg={err}");
    }
}
