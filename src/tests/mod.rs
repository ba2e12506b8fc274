// End-to-end tests against a local socket
